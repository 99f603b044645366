// src/bin/hot_rewrite.rs
//
// Profiling driver: builds a function body once, then rewrites copies of it in
// a hot loop. Every other statement is `a, b := 0, 1`, which the rewrite
// splits into two single declarations.
//
//   hot_rewrite --items 50000 --secs 3 [--iters N] [--identity]

use go_rewrite::ast::{AstArena, Interner, SimpleStmt, Stmt, StmtId};
use go_rewrite::builder::Builder;
use go_rewrite::{Node, rewrite};
use std::hint::black_box as bb;
use std::time::{Duration, Instant};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

// ----------------- arg parsing -----------------

fn arg_value<'a>(args: &'a [String], key: &str) -> Option<&'a str> {
    let mut it = args.iter();
    while let Some(a) = it.next() {
        if a == key {
            return it.next().map(|s| s.as_str());
        }
    }
    None
}

fn arg_usize(args: &[String], key: &str, default: usize) -> usize {
    arg_value(args, key)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn arg_f64(args: &[String], key: &str, default: f64) -> f64 {
    arg_value(args, key)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

// ----------------- tree -----------------

fn build_body(items: usize) -> (AstArena, Interner, Node) {
    let mut ast = AstArena::new();
    let mut names = Interner::new();
    ast.stmts.reserve(items);
    ast.exprs.reserve(items * 3);

    let mut b = Builder::new(&mut ast, &mut names);
    let mut stmts: Vec<StmtId> = Vec::with_capacity(items);
    for i in 0..items {
        let stmt = if i % 2 == 0 {
            let (zero, one) = (b.int("0"), b.int("1"));
            b.short_var_decl(&["a", "b"], [zero, one])
        } else {
            let f = b.name("f");
            let x = b.name("x");
            let call = b.call(f, [x]);
            b.expr_stmt(call)
        };
        stmts.push(stmt);
    }
    let body = b.block(stmts);
    (ast, names, Node::Block(body))
}

/// Splits every multi-name short variable declaration.
fn split_decls(ast: &mut AstArena, node: Node) -> (Node, bool) {
    let Some(id) = node.as_stmt() else {
        return (node, true);
    };
    let Stmt::Simple(simple) = ast.stmts[id] else {
        return (node, true);
    };
    let SimpleStmt::ShortVarDecl { names, values } = ast.simple_stmts[simple] else {
        return (node, false);
    };
    if names.len() < 2 || names.len() != values.len() {
        return (node, false);
    }

    let pairs: Vec<_> = ast
        .ident_names(names)
        .iter()
        .copied()
        .zip(ast.exprs_list(values).iter().copied())
        .collect();
    let mut singles = Vec::with_capacity(pairs.len());
    for (name, value) in pairs {
        let decl = SimpleStmt::ShortVarDecl {
            names: ast.list_ident_names([name]),
            values: ast.list_exprs([value]),
        };
        let simple = ast.simple_stmts.alloc(decl, Default::default());
        singles.push(ast.stmts.alloc(Stmt::Simple(simple), Default::default()));
    }
    (Node::expanded_block(ast, singles), false)
}

// ----------------- hot loop -----------------

#[inline(never)]
fn rewrite_once(template: &AstArena, root: Node, identity: bool) -> u64 {
    let mut ast = template.clone();
    let mut visited: u64 = 0;
    let out = rewrite(&mut ast, root, |ast, node| {
        visited += 1;
        if identity {
            (node, true)
        } else {
            split_decls(ast, node)
        }
    });

    let len = match out {
        Node::Block(block) => block.stmts.len() as u64,
        _ => 0,
    };
    bb(visited ^ len.wrapping_mul(0xA24B_AED4_963E_E407))
}

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().collect();
    let seconds = arg_f64(&args, "--secs", 3.0);
    let items = arg_usize(&args, "--items", 50_000);
    let max_iters = arg_usize(&args, "--iters", usize::MAX);
    let identity = args.iter().any(|a| a == "--identity");

    // Built outside the hot loop; each iteration rewrites a fresh clone.
    let (template, names, root) = build_body(items);

    let dur = Duration::from_secs_f64(seconds);
    let start = Instant::now();

    let mut iters: usize = 0;
    let mut acc: u64 = 0;

    while iters < max_iters && start.elapsed() < dur {
        acc ^= rewrite_once(&template, root, identity);
        iters += 1;
    }

    tracing::info!(
        iters,
        checksum = acc,
        items,
        symbols = names.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "hot_rewrite done"
    );
    bb(acc);
}
