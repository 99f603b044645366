//! Go-like rendering of any node, for debugging and tests.
//!
//! Output uses tab indentation and one statement per line. It follows gofmt
//! for the common shapes but makes no attempt at alignment or at preserving
//! comments that are not attached to a declaration.

use crate::ast::*;
use crate::node::Node;

/// Renders `node` as source text.
pub fn print(ast: &AstArena, names: &Interner, node: Node) -> String {
    let mut p = Printer {
        ast,
        names,
        out: String::new(),
        indent: 0,
    };
    p.node(node);
    p.out
}

struct Printer<'a> {
    ast: &'a AstArena,
    names: &'a Interner,
    out: String,
    indent: usize,
}

impl<'a> Printer<'a> {
    fn node(&mut self, node: Node) {
        match node {
            Node::Comment(id) => self.comment(id),
            Node::CommentGroup(id) => self.comment_group(id),
            Node::Field(id) => self.field(id),
            Node::FieldList(list) => self.params(list),
            Node::Ident(name) => self.ident(name),
            Node::BasicLit(lit) => self.sym(lit.value),
            Node::Expr(id) => self.expr(id),
            Node::Type(id) => self.typ(id),
            Node::Signature(id) => {
                self.push("func");
                self.signature(id);
            }
            Node::TypeParams(id) => self.type_params(id),
            Node::TypeParamDecl(id) => self.type_param_decl(id),
            Node::SimpleStmt(id) => self.simple(id),
            Node::Stmt(id) => self.stmt(id),
            Node::Block(block) | Node::ExpandedBlock(block) => self.block(block.stmts),
            Node::SwitchClause(id) => self.switch_clause(id),
            Node::CommClause(id) => self.comm_clause(id),
            Node::Spec(spec) => self.spec(spec),
            Node::Decl(id) => self.decl(id),
            Node::FuncDecl(id) => self.func_decl(id),
            Node::File(id) => self.file(id),
            Node::Package(pkg) => self.package(pkg),
        }
    }

    // ----- output primitives -----

    fn push(&mut self, s: &str) {
        self.out.push_str(s);
    }

    fn newline(&mut self) {
        self.out.push('\n');
        for _ in 0..self.indent {
            self.out.push('\t');
        }
    }

    fn sym(&mut self, sym: Symbol) {
        let names = self.names;
        self.out.push_str(names.resolve(sym));
    }

    fn ident(&mut self, name: IdentName) {
        self.sym(name.sym);
    }

    fn join<T: Copy>(&mut self, items: &[T], sep: &str, mut f: impl FnMut(&mut Self, T)) {
        for (i, &item) in items.iter().enumerate() {
            if i > 0 {
                self.push(sep);
            }
            f(self, item);
        }
    }

    fn idents(&mut self, list: ListRef<IdentName>) {
        let ast = self.ast;
        self.join(ast.ident_names(list), ", ", Self::ident);
    }

    fn exprs(&mut self, list: ListRef<ExprId>) {
        let ast = self.ast;
        self.join(ast.exprs_list(list), ", ", Self::expr);
    }

    // ----- comments -----

    fn comment(&mut self, id: CommentId) {
        self.sym(self.ast.comments[id].text);
    }

    fn comment_group(&mut self, id: CommentGroupId) {
        let ast = self.ast;
        let comments = ast.comment_ids(ast.comment_groups[id].comments);
        for (i, &c) in comments.iter().enumerate() {
            if i > 0 {
                self.newline();
            }
            self.comment(c);
        }
    }

    /// Doc comment above a declaration, followed by a line break.
    fn doc(&mut self, doc: Option<CommentGroupId>) {
        if let Some(doc) = doc {
            self.comment_group(doc);
            self.newline();
        }
    }

    fn trailing_comment(&mut self, comment: Option<CommentGroupId>) {
        if let Some(comment) = comment {
            self.push(" ");
            self.comment_group(comment);
        }
    }

    // ----- files and declarations -----

    fn package(&mut self, pkg: Package) {
        let ast = self.ast;
        for (i, &file) in ast.file_ids(pkg.files).iter().enumerate() {
            if i > 0 {
                self.newline();
            }
            self.file(file);
        }
    }

    fn file(&mut self, id: FileId) {
        let ast = self.ast;
        let file = ast.files[id];
        self.doc(file.doc);
        self.push("package ");
        self.ident(file.name);
        for &decl in ast.top_decls(file.decls) {
            self.newline();
            self.newline();
            match decl {
                TopLevelDecl::Decl(id) => self.decl(id),
                TopLevelDecl::Func(id) => self.func_decl(id),
            }
        }
        self.newline();
    }

    fn decl(&mut self, id: DeclId) {
        let ast = self.ast;
        let decl = match ast.decls[id] {
            Decl::Gen(decl) => decl,
            Decl::Bad => return self.push("BadDecl"),
        };
        self.doc(decl.doc);
        self.push(match decl.kind {
            GenDeclKind::Import => "import",
            GenDeclKind::Const => "const",
            GenDeclKind::Type => "type",
            GenDeclKind::Var => "var",
        });
        let specs = ast.specs_list(decl.specs);
        if !decl.grouped && specs.len() == 1 {
            self.push(" ");
            self.spec(specs[0]);
            return;
        }
        self.push(" (");
        self.indent += 1;
        for &spec in specs {
            self.newline();
            self.spec(spec);
        }
        self.indent -= 1;
        self.newline();
        self.push(")");
    }

    fn spec(&mut self, spec: Spec) {
        match spec {
            Spec::Import(s) => {
                self.doc(s.doc);
                if let Some(name) = s.name {
                    self.ident(name);
                    self.push(" ");
                }
                self.sym(s.path.value);
                self.trailing_comment(s.comment);
            }
            Spec::Value(s) => {
                self.doc(s.doc);
                self.idents(s.names);
                if let Some(typ) = s.typ {
                    self.push(" ");
                    self.typ(typ);
                }
                if !s.values.is_empty() {
                    self.push(" = ");
                    self.exprs(s.values);
                }
                self.trailing_comment(s.comment);
            }
            Spec::Type(s) => {
                self.doc(s.doc);
                self.ident(s.name);
                if let Some(tp) = s.type_params {
                    self.type_params(tp);
                }
                self.push(if s.alias { " = " } else { " " });
                self.typ(s.typ);
                self.trailing_comment(s.comment);
            }
        }
    }

    fn func_decl(&mut self, id: FuncDeclId) {
        let func = self.ast.funcs[id];
        self.doc(func.doc);
        self.push("func ");
        if let Some(recv) = func.recv {
            self.params(recv);
            self.push(" ");
        }
        self.ident(func.name);
        if let Some(tp) = func.type_params {
            self.type_params(tp);
        }
        self.signature(func.signature);
        if let Some(body) = func.body {
            self.push(" ");
            self.block(body.stmts);
        }
    }

    fn type_params(&mut self, id: TypeParamsId) {
        let ast = self.ast;
        self.push("[");
        self.join(
            ast.type_param_decl_ids(ast.type_params[id].params),
            ", ",
            Self::type_param_decl,
        );
        self.push("]");
    }

    fn type_param_decl(&mut self, id: TypeParamDeclId) {
        let decl = self.ast.type_param_decls[id];
        self.idents(decl.names);
        self.push(" ");
        match decl.constraint {
            TypeConstraint::Any => self.push("any"),
            TypeConstraint::TypeElem(elem) => self.type_elem(elem),
            TypeConstraint::Interface(typ) => self.typ(typ),
        }
    }

    fn type_elem(&mut self, elem: TypeElem) {
        let ast = self.ast;
        self.join(ast.type_terms(elem.terms), " | ", |p, term| match term {
            TypeTerm::Tilde { typ } => {
                p.push("~");
                p.typ(typ);
            }
            TypeTerm::Type { typ } => p.typ(typ),
        });
    }

    // ----- signatures and fields -----

    /// Parameters and results, without the `func` keyword.
    fn signature(&mut self, id: SignatureId) {
        let sig = self.ast.signatures[id];
        self.params(sig.params);
        match sig.results {
            None => {}
            Some(Results::Params(list)) => {
                self.push(" ");
                self.params(list);
            }
            Some(Results::Type(typ)) => {
                self.push(" ");
                self.typ(typ);
            }
        }
    }

    fn params(&mut self, list: FieldList) {
        let ast = self.ast;
        self.push("(");
        self.join(ast.fields_list(list.fields), ", ", Self::field);
        self.push(")");
    }

    fn field(&mut self, id: FieldId) {
        let field = self.ast.fields[id];
        if !field.names.is_empty() {
            self.idents(field.names);
            self.push(" ");
        }
        if field.variadic {
            self.push("...");
        }
        self.typ(field.typ);
        if let Some(tag) = field.tag {
            self.push(" ");
            self.sym(tag.value);
        }
        self.trailing_comment(field.comment);
    }

    // ----- statements -----

    fn block(&mut self, stmts: ListRef<StmtId>) {
        let ast = self.ast;
        let stmts = ast.stmts_list(stmts);
        if stmts.is_empty() {
            return self.push("{}");
        }
        self.push("{");
        self.indent += 1;
        for &stmt in stmts {
            self.newline();
            self.stmt(stmt);
        }
        self.indent -= 1;
        self.newline();
        self.push("}");
    }

    fn stmt(&mut self, id: StmtId) {
        let ast = self.ast;
        match ast.stmts[id] {
            Stmt::Simple(s) => self.simple(s),
            Stmt::Decl(d) => self.decl(d),
            Stmt::Labeled { label, stmt } => {
                self.ident(label);
                self.push(":");
                self.newline();
                self.stmt(stmt);
            }
            Stmt::Go { call } => {
                self.push("go ");
                self.expr(call);
            }
            Stmt::Defer { call } => {
                self.push("defer ");
                self.expr(call);
            }
            Stmt::Return { results } => {
                self.push("return");
                if !results.is_empty() {
                    self.push(" ");
                    self.exprs(results);
                }
            }
            Stmt::Branch(branch) => self.branch(branch),
            Stmt::Block { stmts } => self.block(stmts),
            Stmt::If {
                init,
                cond,
                then_block,
                else_stmt,
            } => {
                self.push("if ");
                self.header_init(init);
                self.expr(cond);
                self.push(" ");
                self.block(then_block.stmts);
                if let Some(else_stmt) = else_stmt {
                    self.push(" else ");
                    self.stmt(else_stmt);
                }
            }
            Stmt::For { kind, block } => {
                self.push("for ");
                self.for_header(kind);
                self.block(block.stmts);
            }
            Stmt::Switch { init, tag, clauses } => {
                self.push("switch ");
                self.header_init(init);
                if let Some(tag) = tag {
                    self.expr(tag);
                    self.push(" ");
                }
                self.clauses(ast.switch_clause_ids(clauses), Self::switch_clause);
            }
            Stmt::TypeSwitch {
                init,
                guard,
                clauses,
            } => {
                self.push("switch ");
                self.header_init(init);
                if let Some(bind) = guard.bind {
                    self.ident(bind);
                    self.push(" := ");
                }
                self.expr(guard.x);
                self.push(".(type) ");
                self.clauses(ast.switch_clause_ids(clauses), Self::switch_clause);
            }
            Stmt::Select { clauses } => {
                self.push("select ");
                self.clauses(ast.comm_clause_ids(clauses), Self::comm_clause);
            }
            Stmt::Bad => self.push("BadStmt"),
        }
    }

    fn header_init(&mut self, init: Option<SimpleStmtId>) {
        if let Some(init) = init {
            self.simple(init);
            self.push("; ");
        }
    }

    fn for_header(&mut self, kind: ForKind) {
        match kind {
            ForKind::Infinite => {}
            ForKind::Cond(cond) => {
                self.expr(cond);
                self.push(" ");
            }
            ForKind::Clause { init, cond, post } => {
                if let Some(init) = init {
                    self.simple(init);
                }
                self.push("; ");
                if let Some(cond) = cond {
                    self.expr(cond);
                }
                self.push("; ");
                if let Some(post) = post {
                    self.simple(post);
                }
                self.push(" ");
            }
            ForKind::Range {
                key,
                value,
                define,
                expr,
            } => {
                if let Some(key) = key {
                    self.expr(key);
                    if let Some(value) = value {
                        self.push(", ");
                        self.expr(value);
                    }
                    self.push(if define { " := " } else { " = " });
                }
                self.push("range ");
                self.expr(expr);
                self.push(" ");
            }
        }
    }

    /// Case clauses sit at the indentation of their statement.
    fn clauses<T: Copy>(&mut self, clauses: &[T], f: fn(&mut Self, T)) {
        self.push("{");
        for &clause in clauses {
            self.newline();
            f(self, clause);
        }
        self.newline();
        self.push("}");
    }

    fn case_body(&mut self, stmts: ListRef<StmtId>) {
        let ast = self.ast;
        self.indent += 1;
        for &stmt in ast.stmts_list(stmts) {
            self.newline();
            self.stmt(stmt);
        }
        self.indent -= 1;
    }

    fn switch_clause(&mut self, id: SwitchClauseId) {
        let ast = self.ast;
        match ast.switch_clauses[id] {
            SwitchClause::ExprCase { items, stmts } => {
                if items.is_empty() {
                    self.push("default:");
                } else {
                    self.push("case ");
                    self.exprs(items);
                    self.push(":");
                }
                self.case_body(stmts);
            }
            SwitchClause::TypeCase { items, stmts } => {
                if items.is_empty() {
                    self.push("default:");
                } else {
                    self.push("case ");
                    self.join(ast.type_case_elems(items), ", ", |p, item| match item {
                        TypeCaseElem::Type(typ) => p.typ(typ),
                        TypeCaseElem::Nil => p.push("nil"),
                    });
                    self.push(":");
                }
                self.case_body(stmts);
            }
        }
    }

    fn comm_clause(&mut self, id: CommClauseId) {
        let clause = self.ast.comm_clauses[id];
        match clause.comm {
            Some(comm) => {
                self.push("case ");
                self.simple(comm);
                self.push(":");
            }
            None => self.push("default:"),
        }
        self.case_body(clause.stmts);
    }

    fn branch(&mut self, branch: BranchStmt) {
        let (keyword, label) = match branch {
            BranchStmt::Break { label } => ("break", label),
            BranchStmt::Continue { label } => ("continue", label),
            BranchStmt::Goto { label } => ("goto", Some(label)),
            BranchStmt::Fallthrough => ("fallthrough", None),
        };
        self.push(keyword);
        if let Some(label) = label {
            self.push(" ");
            self.ident(label);
        }
    }

    fn simple(&mut self, id: SimpleStmtId) {
        match self.ast.simple_stmts[id] {
            SimpleStmt::Empty => {}
            SimpleStmt::Expr(x) => self.expr(x),
            SimpleStmt::Send { chan, value } => {
                self.expr(chan);
                self.push(" <- ");
                self.expr(value);
            }
            SimpleStmt::IncDec { expr, op } => {
                self.expr(expr);
                self.push(match op {
                    IncDecOp::Inc => "++",
                    IncDecOp::Dec => "--",
                });
            }
            SimpleStmt::Assign { lhs, op, rhs } => {
                self.exprs(lhs);
                self.push(" ");
                self.push(assign_op_str(op));
                self.push(" ");
                self.exprs(rhs);
            }
            SimpleStmt::ShortVarDecl { names, values } => {
                self.idents(names);
                self.push(" := ");
                self.exprs(values);
            }
        }
    }

    // ----- expressions -----

    fn expr(&mut self, id: ExprId) {
        let ast = self.ast;
        match ast.exprs[id] {
            Expr::Ident(name) => self.ident(name),
            Expr::BasicLit(lit) => self.sym(lit.value),
            Expr::FuncLit { sig, body } => {
                self.push("func");
                self.signature(sig);
                self.push(" ");
                self.block(body.stmts);
            }
            Expr::CompositeLit { typ, lit } => {
                self.typ(typ);
                self.literal_value(lit);
            }
            Expr::IndexOrInstantiate { base, args } => {
                self.expr(base);
                self.push("[");
                self.join(ast.expr_or_types(args), ", ", |p, arg| match arg {
                    ExprOrType::Expr(x) => p.expr(x),
                    ExprOrType::Type(t) => p.typ(t),
                });
                self.push("]");
            }
            Expr::Paren { expr } => {
                self.push("(");
                self.expr(expr);
                self.push(")");
            }
            Expr::Selector { expr, sel } => {
                self.expr(expr);
                self.push(".");
                self.ident(sel);
            }
            Expr::Slice { expr, lo, hi, max } => {
                self.expr(expr);
                self.push("[");
                for (i, bound) in [lo, hi, max].into_iter().enumerate() {
                    if i == 2 && bound.is_none() {
                        break;
                    }
                    if i > 0 {
                        self.push(":");
                    }
                    if let Some(bound) = bound {
                        self.expr(bound);
                    }
                }
                self.push("]");
            }
            Expr::TypeAssert { expr, typ } => {
                self.expr(expr);
                self.push(".(");
                match typ {
                    Some(typ) => self.typ(typ),
                    None => self.push("type"),
                }
                self.push(")");
            }
            Expr::Call {
                callee,
                type_arg,
                args,
                ellipsis,
            } => {
                match callee {
                    CallCallee::Expr(x) => self.expr(x),
                    CallCallee::Type(t) => self.typ(t),
                }
                self.push("(");
                if let Some(t) = type_arg {
                    self.typ(t);
                    if !args.is_empty() {
                        self.push(", ");
                    }
                }
                self.exprs(args);
                if ellipsis {
                    self.push("...");
                }
                self.push(")");
            }
            Expr::Unary { op, expr } => {
                self.push(unary_op_str(op));
                self.expr(expr);
            }
            Expr::Binary { left, op, right } => {
                self.expr(left);
                self.push(" ");
                self.push(binary_op_str(op));
                self.push(" ");
                self.expr(right);
            }
            Expr::MethodExpr { recv, name } => {
                self.typ(recv);
                self.push(".");
                self.ident(name);
            }
            Expr::Bad => self.push("BadExpr"),
        }
    }

    fn literal_value(&mut self, lit: LiteralValue) {
        let ast = self.ast;
        self.push("{");
        self.join(ast.keyed_elems_list(lit.elements), ", ", |p, elem| {
            match elem.key {
                None => {}
                Some(Key::FieldName(name)) => p.ident(name),
                Some(Key::Expr(x)) => p.expr(x),
                Some(Key::Literal(lit)) => p.literal_value(lit),
            }
            if elem.key.is_some() {
                p.push(": ");
            }
            match elem.value {
                Element::Expr(x) => p.expr(x),
                Element::Literal(lit) => p.literal_value(lit),
            }
        });
        self.push("}");
    }

    // ----- types -----

    fn typ(&mut self, id: TypeId) {
        let ast = self.ast;
        match ast.types[id] {
            Type::Named { pkg, name, args } => {
                if let Some(pkg) = pkg {
                    self.ident(pkg);
                    self.push(".");
                }
                self.ident(name);
                if !args.is_empty() {
                    self.push("[");
                    self.join(ast.types_list(args), ", ", Self::typ);
                    self.push("]");
                }
            }
            Type::Pointer { elem } => {
                self.push("*");
                self.typ(elem);
            }
            Type::Array { len, elem } => {
                self.push("[");
                match len {
                    ArrayLen::Expr(x) => self.expr(x),
                    ArrayLen::Ellipsis => self.push("..."),
                }
                self.push("]");
                self.typ(elem);
            }
            Type::Slice { elem } => {
                self.push("[]");
                self.typ(elem);
            }
            Type::Map { key, val } => {
                self.push("map[");
                self.typ(key);
                self.push("]");
                self.typ(val);
            }
            Type::Chan { dir, elem } => {
                self.push(match dir {
                    ChanDir::Both => "chan ",
                    ChanDir::Send => "chan<- ",
                    ChanDir::Recv => "<-chan ",
                });
                self.typ(elem);
            }
            Type::Struct { fields } => {
                let fields = ast.fields_list(fields.fields);
                if fields.is_empty() {
                    return self.push("struct{}");
                }
                self.push("struct {");
                self.indent += 1;
                for &field in fields {
                    self.newline();
                    self.doc(ast.fields[field].doc);
                    self.field(field);
                }
                self.indent -= 1;
                self.newline();
                self.push("}");
            }
            Type::Interface { elems } => {
                let elems = ast.interface_elems(elems);
                if elems.is_empty() {
                    return self.push("interface{}");
                }
                self.push("interface {");
                self.indent += 1;
                for &elem in elems {
                    self.newline();
                    match elem {
                        InterfaceElem::Method { name, sig } => {
                            self.ident(name);
                            self.signature(sig);
                        }
                        InterfaceElem::TypeElem(elem) => self.type_elem(elem),
                    }
                }
                self.indent -= 1;
                self.newline();
                self.push("}");
            }
            Type::Func { sig } => {
                self.push("func");
                self.signature(sig);
            }
            Type::Paren { typ } => {
                self.push("(");
                self.typ(typ);
                self.push(")");
            }
            Type::Bad => self.push("BadType"),
        }
    }
}

fn unary_op_str(op: UnaryOp) -> &'static str {
    match op {
        UnaryOp::Add => "+",
        UnaryOp::Sub => "-",
        UnaryOp::Not => "!",
        UnaryOp::Xor => "^",
        UnaryOp::Deref => "*",
        UnaryOp::Addr => "&",
        UnaryOp::Recv => "<-",
    }
}

fn binary_op_str(op: BinaryOp) -> &'static str {
    match op {
        BinaryOp::Add => "+",
        BinaryOp::Sub => "-",
        BinaryOp::Mul => "*",
        BinaryOp::Div => "/",
        BinaryOp::Mod => "%",
        BinaryOp::And => "&",
        BinaryOp::Or => "|",
        BinaryOp::Xor => "^",
        BinaryOp::Shl => "<<",
        BinaryOp::Shr => ">>",
        BinaryOp::AndNot => "&^",
        BinaryOp::LAnd => "&&",
        BinaryOp::LOr => "||",
        BinaryOp::Eq => "==",
        BinaryOp::Ne => "!=",
        BinaryOp::Lt => "<",
        BinaryOp::Le => "<=",
        BinaryOp::Gt => ">",
        BinaryOp::Ge => ">=",
    }
}

fn assign_op_str(op: AssignOp) -> &'static str {
    match op {
        AssignOp::Assign => "=",
        AssignOp::AddAssign => "+=",
        AssignOp::SubAssign => "-=",
        AssignOp::MulAssign => "*=",
        AssignOp::DivAssign => "/=",
        AssignOp::ModAssign => "%=",
        AssignOp::AndAssign => "&=",
        AssignOp::OrAssign => "|=",
        AssignOp::XorAssign => "^=",
        AssignOp::ShlAssign => "<<=",
        AssignOp::ShrAssign => ">>=",
        AssignOp::AndNotAssign => "&^=",
    }
}
