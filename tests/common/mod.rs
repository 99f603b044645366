#![allow(dead_code)]

use go_rewrite::Node;
use go_rewrite::ast::{AstArena, Interner, SimpleStmt, Span, Stmt};
use go_rewrite::builder::Builder;
use tracing_subscriber::EnvFilter;

/// Routes rewriter events to the test output; `RUST_LOG=go_rewrite=trace`
/// shows splices.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub struct Fixture {
    pub ast: AstArena,
    pub names: Interner,
}

impl Fixture {
    pub fn new() -> Self {
        init_tracing();
        Self {
            ast: AstArena::new(),
            names: Interner::new(),
        }
    }

    pub fn builder(&mut self) -> Builder<'_> {
        Builder::new(&mut self.ast, &mut self.names)
    }

    pub fn print(&self, node: Node) -> String {
        go_rewrite::printer::print(&self.ast, &self.names, node)
    }
}

/// Statements of a block-like node.
pub fn block_len(ast: &AstArena, node: Node) -> usize {
    match node {
        Node::Block(block) | Node::ExpandedBlock(block) => ast.stmts_list(block.stmts).len(),
        other => panic!("expected a block, got {other:?}"),
    }
}

/// `a, b := x, y` becomes an expanded block of `a := x` and `b := y`.
/// Anything else is returned unchanged, and traversal continues.
pub fn split_short_var_decl(ast: &mut AstArena, node: Node) -> (Node, bool) {
    let Some(id) = node.as_stmt() else {
        return (node, true);
    };
    let Stmt::Simple(simple) = ast.stmts[id] else {
        return (node, true);
    };
    let SimpleStmt::ShortVarDecl { names, values } = ast.simple_stmts[simple] else {
        return (node, true);
    };
    if names.len() < 2 || names.len() != values.len() {
        return (node, true);
    }

    let pairs: Vec<_> = ast
        .ident_names(names)
        .iter()
        .copied()
        .zip(ast.exprs_list(values).iter().copied())
        .collect();
    let singles: Vec<_> = pairs
        .into_iter()
        .map(|(name, value)| {
            let decl = SimpleStmt::ShortVarDecl {
                names: ast.list_ident_names([name]),
                values: ast.list_exprs([value]),
            };
            let simple = ast.simple_stmts.alloc(decl, Span::default());
            ast.stmts.alloc(Stmt::Simple(simple), Span::default())
        })
        .collect();
    (Node::expanded_block(ast, singles), true)
}

/// Go source of [`sample_package`], as printed.
pub const SAMPLE_SOURCE: &str = "// Package p pairs things.
package p

import m \"math\"

type Pair[K any] struct {
\tKey K `json:\"key\"`
}

func Run(ch chan int) int {
\tselect {
\tcase v := <-ch:
\t\t_ = v
\tdefault:
\t}
\tswitch len(ch) {
\tcase 1:
\t\treturn 1
\t}
\treturn 0
}
";

/// A one-file package that reaches every callback-visible node kind.
pub fn sample_package(fx: &mut Fixture) -> go_rewrite::ast::Package {
    use go_rewrite::ast::*;

    let mut b = fx.builder();
    let doc = b.comment_group(&["// Package p pairs things."]);
    let import = b.import_spec(Some("m"), "math");
    let imports = b.gen_decl(GenDeclKind::Import, [import]);

    // type Pair[K any] struct { Key K `json:"key"` }
    let k = b.ident("K");
    let k_names = b.ast.list_ident_names([k]);
    let k_any = b.ast.type_param_decls.alloc(
        TypeParamDecl {
            names: k_names,
            constraint: TypeConstraint::Any,
        },
        Span::default(),
    );
    let params = b.ast.list_type_param_decl_ids([k_any]);
    let tparams = b.ast.type_params.alloc(TypeParams { params }, Span::default());
    let k_type = b.named_type("K");
    let key = b.field(&["Key"], k_type);
    let tag = b.lit(BasicLitKind::String, "`json:\"key\"`");
    b.ast.fields[key].tag = Some(tag);
    let fields = b.field_list([key]);
    let pair = b.typ(Type::Struct { fields });
    let pair_name = b.ident("Pair");
    let pair_spec = Spec::Type(TypeSpec {
        doc: None,
        name: pair_name,
        type_params: Some(tparams),
        alias: false,
        typ: pair,
        comment: None,
    });
    let types = b.gen_decl(GenDeclKind::Type, [pair_spec]);

    // func Run(ch chan int) int
    let int_t = b.named_type("int");
    let chan_t = b.typ(Type::Chan {
        dir: ChanDir::Both,
        elem: int_t,
    });
    let ch_param = b.field(&["ch"], chan_t);
    let params = b.field_list([ch_param]);
    let result = b.named_type("int");
    let sig = b.signature(params, Some(Results::Type(result)));

    // select { case v := <-ch: _ = v; default: }
    let ch = b.name("ch");
    let recv = b.expr(Expr::Unary {
        op: UnaryOp::Recv,
        expr: ch,
    });
    let v = b.ident("v");
    let names = b.ast.list_ident_names([v]);
    let values = b.ast.list_exprs([recv]);
    let comm = b.simple(SimpleStmt::ShortVarDecl { names, values });
    let (blank, v) = (b.name("_"), b.name("v"));
    let use_v = b.assign([blank], AssignOp::Assign, [v]);
    let stmts = b.ast.list_stmts([use_v]);
    let recv_case = b.ast.comm_clauses.alloc(
        CommClause {
            comm: Some(comm),
            stmts,
        },
        Span::default(),
    );
    let default_case = b.ast.comm_clauses.alloc(
        CommClause {
            comm: None,
            stmts: ListRef::EMPTY,
        },
        Span::default(),
    );
    let clauses = b.ast.list_comm_clause_ids([recv_case, default_case]);
    let select = b.stmt(Stmt::Select { clauses });

    // switch len(ch) { case 1: return 1 }
    let (len, ch) = (b.name("len"), b.name("ch"));
    let tag = b.call(len, [ch]);
    let (one, ret_one) = (b.int("1"), b.int("1"));
    let ret_one = b.ret([ret_one]);
    let items = b.ast.list_exprs([one]);
    let stmts = b.ast.list_stmts([ret_one]);
    let case = b
        .ast
        .switch_clauses
        .alloc(SwitchClause::ExprCase { items, stmts }, Span::default());
    let clauses = b.ast.list_switch_clause_ids([case]);
    let switch = b.stmt(Stmt::Switch {
        init: None,
        tag: Some(tag),
        clauses,
    });

    let zero = b.int("0");
    let ret_zero = b.ret([zero]);
    let body = b.block([select, switch, ret_zero]);
    let run = b.func_decl("Run", sig, Some(body));

    let file = b.file(
        "p",
        [
            TopLevelDecl::Decl(imports),
            TopLevelDecl::Decl(types),
            TopLevelDecl::Func(run),
        ],
    );
    b.ast.files[file].doc = Some(doc);
    b.package("p", [file])
}
