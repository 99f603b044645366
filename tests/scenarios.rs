mod common;

use common::{Fixture, block_len, split_short_var_decl};
use go_rewrite::ast::{AstArena, Expr, ExprId, ForKind, GenDeclKind, Stmt, TopLevelDecl};
use go_rewrite::{Node, rewrite};

#[test]
fn multi_assign_expands_into_single_declarations() {
    let mut fx = Fixture::new();
    let mut b = fx.builder();
    let (zero, one) = (b.int("0"), b.int("1"));
    let multi = b.short_var_decl(&["x", "y"], [zero, one]);
    let body = b.block([multi]);
    let sig = b.empty_signature();
    let lit = b.func_lit(sig, body);

    let out = rewrite(&mut fx.ast, Node::Expr(lit), split_short_var_decl);

    assert_eq!(out, Node::Expr(lit));
    assert_eq!(fx.print(out), "func() {\n\tx := 0\n\ty := 1\n}");
}

#[test]
fn blank_range_key_and_value_are_dropped() {
    let mut fx = Fixture::new();
    let mut b = fx.builder();
    let (k, v, xs) = (b.name("_"), b.name("_"), b.name("xs"));
    let f = b.name("f");
    let x = b.name("x");
    let call = b.call(f, [x]);
    let call = b.expr_stmt(call);
    let body = b.block([call]);
    let range = b.range_stmt(Some(k), Some(v), xs, body);
    let blank = fx.names.intern("_");

    assert_eq!(fx.print(Node::Stmt(range)), "for _, _ := range xs {\n\tf(x)\n}");

    rewrite(&mut fx.ast, Node::Stmt(range), |ast, node| {
        let Some(id) = node.as_stmt() else {
            return (node, true);
        };
        let is_blank = |ast: &AstArena, e: Option<ExprId>| {
            matches!(e.map(|e| ast.exprs[e]), Some(Expr::Ident(name)) if name.sym == blank)
        };
        if let Stmt::For {
            kind: ForKind::Range { key, value, expr, .. },
            block,
        } = ast.stmts[id]
        {
            if is_blank(ast, key) && is_blank(ast, value) {
                ast.stmts[id] = Stmt::For {
                    kind: ForKind::Range {
                        key: None,
                        value: None,
                        define: false,
                        expr,
                    },
                    block,
                };
            }
        }
        (node, true)
    });

    let Stmt::For {
        kind: ForKind::Range { key, value, .. },
        ..
    } = fx.ast.stmts[range]
    else {
        panic!("range statement replaced");
    };
    assert_eq!((key, value), (None, None));
    assert_eq!(fx.print(Node::Stmt(range)), "for range xs {\n\tf(x)\n}");
}

#[test]
fn identity_rewrite_leaves_printed_file_unchanged() {
    let mut fx = Fixture::new();
    let mut b = fx.builder();
    let fmt_import = b.import_spec(None, "fmt");
    let imports = b.gen_decl(GenDeclKind::Import, [fmt_import]);
    let one = b.int("1");
    let answer = b.value_spec(&["answer"], None, [one]);
    let vars = b.gen_decl(GenDeclKind::Var, [answer]);

    let fmt = b.name("fmt");
    let println = b.selector(fmt, "Println");
    let answer = b.name("answer");
    let hello = b.string("hello");
    let call = b.call(println, [hello, answer]);
    let call = b.expr_stmt(call);
    let body = b.block([call]);
    let sig = b.empty_signature();
    let main = b.func_decl("main", sig, Some(body));
    let file = b.file(
        "main",
        [
            TopLevelDecl::Decl(imports),
            TopLevelDecl::Decl(vars),
            TopLevelDecl::Func(main),
        ],
    );

    let before = fx.print(Node::File(file));
    let arena_before = fx.ast.clone();

    let out = rewrite(&mut fx.ast, Node::File(file), |_, node| (node, true));

    assert_eq!(out, Node::File(file));
    assert_eq!(fx.print(out), before);
    assert_eq!(fx.ast, arena_before);
    assert_eq!(
        before,
        "package main\n\nimport \"fmt\"\n\nvar answer = 1\n\nfunc main() {\n\tfmt.Println(\"hello\", answer)\n}\n"
    );
}

#[test]
fn declining_descent_at_root_visits_only_the_root() {
    let mut fx = Fixture::new();
    let mut b = fx.builder();
    let mut deep = b.name("x");
    for i in 0..32 {
        let rhs = b.int(&i.to_string());
        deep = b.binary(deep, go_rewrite::ast::BinaryOp::Add, rhs);
    }
    let ret = b.ret([deep]);
    let body = b.block([ret]);
    let sig = b.empty_signature();
    let func = b.func_decl("f", sig, Some(body));
    let file = b.file("p", [TopLevelDecl::Func(func)]);
    let before = fx.ast.clone();

    let mut calls = 0;
    let out = rewrite(&mut fx.ast, Node::File(file), |_, node| {
        calls += 1;
        (node, false)
    });

    assert_eq!(calls, 1);
    assert_eq!(out, Node::File(file));
    assert_eq!(fx.ast, before);
}

#[test]
fn empty_expansion_deletes_the_statement() {
    let mut fx = Fixture::new();
    let mut b = fx.builder();
    let stmts: Vec<_> = ["a", "b", "c"]
        .into_iter()
        .map(|f| {
            let f = b.name(f);
            let call = b.call(f, []);
            b.expr_stmt(call)
        })
        .collect();
    let block = b.block(stmts.clone());
    let middle = stmts[1];

    let mut visited = Vec::new();
    let out = rewrite(&mut fx.ast, Node::Block(block), |ast, node| match node {
        Node::Stmt(id) => {
            visited.push(id);
            if id == middle {
                (Node::expanded_block(ast, []), false)
            } else {
                (node, true)
            }
        }
        _ => (node, true),
    });

    assert_eq!(visited, stmts);
    let Node::Block(out) = out else {
        panic!("root changed kind: {out:?}");
    };
    assert_eq!(fx.ast.stmts_list(out.stmts), &[stmts[0], stmts[2]]);
    assert_eq!(fx.print(Node::Block(out)), "{\n\ta()\n\tc()\n}");
}

#[test]
fn consecutive_expansions_keep_source_order() {
    let mut fx = Fixture::new();
    let mut b = fx.builder();
    let (one, two) = (b.int("1"), b.int("2"));
    let first = b.short_var_decl(&["a", "b"], [one, two]);
    let (three, four, five) = (b.int("3"), b.int("4"), b.int("5"));
    let second = b.short_var_decl(&["c", "d", "e"], [three, four, five]);
    let block = b.block([first, second]);

    let out = rewrite(&mut fx.ast, Node::Block(block), split_short_var_decl);

    assert_eq!(block_len(&fx.ast, out), 2 + 3);
    assert_eq!(
        fx.print(out),
        "{\n\ta := 1\n\tb := 2\n\tc := 3\n\td := 4\n\te := 5\n}"
    );
}
