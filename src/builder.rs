//! Helpers for assembling trees by hand.
//!
//! Nodes get default spans. Names and literal text are interned through the
//! builder's `Interner`.

use crate::ast::{self, AstArena, Interner, ListRef, Span};

pub struct Builder<'a> {
    pub ast: &'a mut AstArena,
    pub names: &'a mut Interner,
}

impl<'a> Builder<'a> {
    pub fn new(ast: &'a mut AstArena, names: &'a mut Interner) -> Self {
        Self { ast, names }
    }

    pub fn ident(&mut self, name: &str) -> ast::IdentName {
        ast::IdentName::new(self.names.intern(name))
    }

    fn idents(&mut self, names: &[&str]) -> ListRef<ast::IdentName> {
        let names: Vec<_> = names.iter().map(|n| self.ident(n)).collect();
        self.ast.list_ident_names(names)
    }

    pub fn lit(&mut self, kind: ast::BasicLitKind, text: &str) -> ast::BasicLit {
        ast::BasicLit {
            kind,
            value: self.names.intern(text),
        }
    }

    // ----- expressions -----

    pub fn expr(&mut self, expr: ast::Expr) -> ast::ExprId {
        self.ast.exprs.alloc(expr, Span::default())
    }

    pub fn name(&mut self, name: &str) -> ast::ExprId {
        let ident = self.ident(name);
        self.expr(ast::Expr::Ident(ident))
    }

    pub fn int(&mut self, text: &str) -> ast::ExprId {
        let lit = self.lit(ast::BasicLitKind::Int, text);
        self.expr(ast::Expr::BasicLit(lit))
    }

    /// String literal; `text` is the unquoted contents.
    pub fn string(&mut self, text: &str) -> ast::ExprId {
        let lit = self.lit(ast::BasicLitKind::String, &format!("{text:?}"));
        self.expr(ast::Expr::BasicLit(lit))
    }

    pub fn selector(&mut self, x: ast::ExprId, sel: &str) -> ast::ExprId {
        let sel = self.ident(sel);
        self.expr(ast::Expr::Selector { expr: x, sel })
    }

    pub fn call(
        &mut self,
        fun: ast::ExprId,
        args: impl IntoIterator<Item = ast::ExprId>,
    ) -> ast::ExprId {
        let args = self.ast.list_exprs(args);
        self.expr(ast::Expr::Call {
            callee: ast::CallCallee::Expr(fun),
            type_arg: None,
            args,
            ellipsis: false,
        })
    }

    pub fn binary(
        &mut self,
        left: ast::ExprId,
        op: ast::BinaryOp,
        right: ast::ExprId,
    ) -> ast::ExprId {
        self.expr(ast::Expr::Binary { left, op, right })
    }

    pub fn func_lit(&mut self, sig: ast::SignatureId, body: ast::Block) -> ast::ExprId {
        self.expr(ast::Expr::FuncLit { sig, body })
    }

    // ----- types -----

    pub fn typ(&mut self, typ: ast::Type) -> ast::TypeId {
        self.ast.types.alloc(typ, Span::default())
    }

    pub fn named_type(&mut self, name: &str) -> ast::TypeId {
        let name = self.ident(name);
        self.typ(ast::Type::Named {
            pkg: None,
            name,
            args: ListRef::EMPTY,
        })
    }

    pub fn field(&mut self, names: &[&str], typ: ast::TypeId) -> ast::FieldId {
        let names = self.idents(names);
        let field = ast::Field {
            doc: None,
            names,
            variadic: false,
            typ,
            tag: None,
            comment: None,
        };
        self.ast.fields.alloc(field, Span::default())
    }

    pub fn field_list(&mut self, fields: impl IntoIterator<Item = ast::FieldId>) -> ast::FieldList {
        ast::FieldList {
            fields: self.ast.list_fields(fields),
        }
    }

    pub fn signature(
        &mut self,
        params: ast::FieldList,
        results: Option<ast::Results>,
    ) -> ast::SignatureId {
        self.ast
            .signatures
            .alloc(ast::Signature { params, results }, Span::default())
    }

    /// `func()` with no parameters or results.
    pub fn empty_signature(&mut self) -> ast::SignatureId {
        self.signature(ast::FieldList::default(), None)
    }

    // ----- statements -----

    pub fn stmt(&mut self, stmt: ast::Stmt) -> ast::StmtId {
        self.ast.stmts.alloc(stmt, Span::default())
    }

    pub fn simple(&mut self, stmt: ast::SimpleStmt) -> ast::SimpleStmtId {
        self.ast.simple_stmts.alloc(stmt, Span::default())
    }

    pub fn simple_stmt(&mut self, stmt: ast::SimpleStmt) -> ast::StmtId {
        let simple = self.simple(stmt);
        self.stmt(ast::Stmt::Simple(simple))
    }

    pub fn short_var_decl(
        &mut self,
        names: &[&str],
        values: impl IntoIterator<Item = ast::ExprId>,
    ) -> ast::StmtId {
        let names = self.idents(names);
        let values = self.ast.list_exprs(values);
        self.simple_stmt(ast::SimpleStmt::ShortVarDecl { names, values })
    }

    pub fn assign(
        &mut self,
        lhs: impl IntoIterator<Item = ast::ExprId>,
        op: ast::AssignOp,
        rhs: impl IntoIterator<Item = ast::ExprId>,
    ) -> ast::StmtId {
        let lhs = self.ast.list_exprs(lhs);
        let rhs = self.ast.list_exprs(rhs);
        self.simple_stmt(ast::SimpleStmt::Assign { lhs, op, rhs })
    }

    pub fn expr_stmt(&mut self, x: ast::ExprId) -> ast::StmtId {
        self.simple_stmt(ast::SimpleStmt::Expr(x))
    }

    pub fn ret(&mut self, results: impl IntoIterator<Item = ast::ExprId>) -> ast::StmtId {
        let results = self.ast.list_exprs(results);
        self.stmt(ast::Stmt::Return { results })
    }

    pub fn block(&mut self, stmts: impl IntoIterator<Item = ast::StmtId>) -> ast::Block {
        ast::Block {
            stmts: self.ast.list_stmts(stmts),
        }
    }

    pub fn block_stmt(&mut self, stmts: impl IntoIterator<Item = ast::StmtId>) -> ast::StmtId {
        let stmts = self.ast.list_stmts(stmts);
        self.stmt(ast::Stmt::Block { stmts })
    }

    pub fn if_stmt(
        &mut self,
        cond: ast::ExprId,
        then_block: ast::Block,
        else_stmt: Option<ast::StmtId>,
    ) -> ast::StmtId {
        self.stmt(ast::Stmt::If {
            init: None,
            cond,
            then_block,
            else_stmt,
        })
    }

    /// `for key, value := range x { body }`; pass no key and value for
    /// `for range x`.
    pub fn range_stmt(
        &mut self,
        key: Option<ast::ExprId>,
        value: Option<ast::ExprId>,
        x: ast::ExprId,
        body: ast::Block,
    ) -> ast::StmtId {
        self.stmt(ast::Stmt::For {
            kind: ast::ForKind::Range {
                key,
                value,
                define: key.is_some(),
                expr: x,
            },
            block: body,
        })
    }

    pub fn labeled(&mut self, label: &str, stmt: ast::StmtId) -> ast::StmtId {
        let label = self.ident(label);
        self.stmt(ast::Stmt::Labeled { label, stmt })
    }

    // ----- declarations -----

    pub fn comment_group(&mut self, lines: &[&str]) -> ast::CommentGroupId {
        let ids: Vec<_> = lines
            .iter()
            .map(|line| {
                let comment = ast::Comment {
                    kind: ast::CommentKind::Line,
                    text: self.names.intern(line),
                };
                self.ast.comments.alloc(comment, Span::default())
            })
            .collect();
        let comments = self.ast.list_comment_ids(ids);
        self.ast
            .comment_groups
            .alloc(ast::CommentGroup { comments }, Span::default())
    }

    pub fn import_spec(&mut self, name: Option<&str>, path: &str) -> ast::Spec {
        let name = name.map(|n| self.ident(n));
        let path = self.lit(ast::BasicLitKind::String, &format!("{path:?}"));
        ast::Spec::Import(ast::ImportSpec {
            doc: None,
            name,
            path,
            comment: None,
        })
    }

    pub fn value_spec(
        &mut self,
        names: &[&str],
        typ: Option<ast::TypeId>,
        values: impl IntoIterator<Item = ast::ExprId>,
    ) -> ast::Spec {
        let names = self.idents(names);
        let values = self.ast.list_exprs(values);
        ast::Spec::Value(ast::ValueSpec {
            doc: None,
            names,
            typ,
            values,
            comment: None,
        })
    }

    pub fn gen_decl(
        &mut self,
        kind: ast::GenDeclKind,
        specs: impl IntoIterator<Item = ast::Spec>,
    ) -> ast::DeclId {
        let specs = self.ast.list_specs(specs);
        let decl = ast::GenDecl {
            doc: None,
            kind,
            grouped: specs.len() > 1,
            specs,
        };
        self.ast.decls.alloc(ast::Decl::Gen(decl), Span::default())
    }

    pub fn func_decl(
        &mut self,
        name: &str,
        sig: ast::SignatureId,
        body: Option<ast::Block>,
    ) -> ast::FuncDeclId {
        let name = self.ident(name);
        let func = ast::FuncDecl {
            doc: None,
            recv: None,
            name,
            type_params: None,
            signature: sig,
            body,
        };
        self.ast.funcs.alloc(func, Span::default())
    }

    pub fn file(
        &mut self,
        package: &str,
        decls: impl IntoIterator<Item = ast::TopLevelDecl>,
    ) -> ast::FileId {
        let name = self.ident(package);
        let decls = self.ast.list_top_decls(decls);
        let file = ast::SourceFile {
            doc: None,
            name,
            decls,
            comments: ListRef::EMPTY,
        };
        self.ast.files.alloc(file, Span::default())
    }

    pub fn package(
        &mut self,
        name: &str,
        files: impl IntoIterator<Item = ast::FileId>,
    ) -> ast::Package {
        ast::Package {
            name: self.names.intern(name),
            files: self.ast.list_file_ids(files),
        }
    }
}
