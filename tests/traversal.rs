mod common;

use common::{Fixture, block_len, split_short_var_decl};
use go_rewrite::ast::{
    AstArena, Decl, Expr, GenDeclKind, IdentName, SimpleStmt, Spec, Stmt, StmtId, SwitchClause,
    TopLevelDecl,
};
use go_rewrite::printer::print;
use go_rewrite::{Node, Rewriter, rewrite, rewrite_with};
use std::collections::HashSet;

/// Records every visit, rendered, plus the end-of-children calls.
struct Recorder<'a> {
    names: &'a go_rewrite::ast::Interner,
    events: Vec<String>,
}

impl Rewriter for Recorder<'_> {
    fn rewrite(&mut self, ast: &mut AstArena, node: Node) -> (Node, bool) {
        self.events
            .push(format!("{}: {}", node.kind_name(), print(ast, self.names, node)));
        (node, true)
    }

    fn end_children(&mut self, _ast: &mut AstArena) {
        self.events.push("end".to_string());
    }
}

fn visits(events: &[String]) -> Vec<&str> {
    events
        .iter()
        .map(String::as_str)
        .filter(|e| *e != "end")
        .collect()
}

#[test]
fn if_statement_children_are_visited_in_surface_order() {
    let mut fx = Fixture::new();
    let mut b = fx.builder();
    let f = b.name("f");
    let call = b.call(f, []);
    let x = b.ident("x");
    let names = b.ast.list_ident_names([x]);
    let values = b.ast.list_exprs([call]);
    let init = b.simple(SimpleStmt::ShortVarDecl { names, values });
    let x = b.name("x");
    let zero = b.int("0");
    let cond = b.binary(x, go_rewrite::ast::BinaryOp::Gt, zero);
    let x = b.name("x");
    let ret_x = b.ret([x]);
    let then_block = b.block([ret_x]);
    let zero = b.int("0");
    let ret_zero = b.ret([zero]);
    let else_stmt = b.block_stmt([ret_zero]);
    let if_stmt = b.stmt(Stmt::If {
        init: Some(init),
        cond,
        then_block,
        else_stmt: Some(else_stmt),
    });

    let mut rec = Recorder {
        names: &fx.names,
        events: Vec::new(),
    };
    rewrite_with(&mut fx.ast, Node::Stmt(if_stmt), &mut rec);

    assert_eq!(
        visits(&rec.events),
        [
            "statement: if x := f(); x > 0 {\n\treturn x\n} else {\n\treturn 0\n}",
            "simple statement: x := f()",
            "identifier: x",
            "expression: f()",
            "expression: f",
            "expression: x > 0",
            "expression: x",
            "expression: 0",
            "block: {\n\treturn x\n}",
            "statement: return x",
            "expression: x",
            "statement: {\n\treturn 0\n}",
            "statement: return 0",
            "expression: 0",
        ]
    );
}

#[test]
fn end_of_children_fires_after_every_descended_node() {
    let mut fx = Fixture::new();
    let mut b = fx.builder();
    let x = b.name("x");
    let one = b.int("1");
    let sum = b.binary(x, go_rewrite::ast::BinaryOp::Add, one);

    let mut rec = Recorder {
        names: &fx.names,
        events: Vec::new(),
    };
    rewrite_with(&mut fx.ast, Node::Expr(sum), &mut rec);

    // Leaves get their own end-of-children call.
    assert_eq!(
        rec.events,
        [
            "expression: x + 1",
            "expression: x",
            "end",
            "expression: 1",
            "end",
            "end",
        ]
    );
}

#[derive(Default)]
struct ScopeDepth {
    depth: usize,
    max_depth: usize,
    visits: usize,
    ends: usize,
    prune_calls: bool,
}

impl Rewriter for ScopeDepth {
    fn rewrite(&mut self, ast: &mut AstArena, node: Node) -> (Node, bool) {
        self.visits += 1;
        let descend = !(self.prune_calls
            && matches!(node, Node::Expr(id) if matches!(ast.exprs[id], Expr::Call { .. })));
        if descend {
            self.depth += 1;
            self.max_depth = self.max_depth.max(self.depth);
        }
        (node, descend)
    }

    fn end_children(&mut self, _ast: &mut AstArena) {
        self.ends += 1;
        self.depth -= 1;
    }
}

#[test]
fn end_of_children_keeps_scope_stack_balanced() {
    let mut fx = Fixture::new();
    let mut b = fx.builder();
    let f = b.name("f");
    let y = b.name("y");
    let call = b.call(f, [y]);
    let (zero, one) = (b.int("0"), b.int("1"));
    let decl = b.short_var_decl(&["a", "b"], [zero, one]);
    let stmt = b.expr_stmt(call);
    let body = b.block([decl, stmt]);
    let sig = b.empty_signature();
    let func = b.func_decl("f", sig, Some(body));
    let file = b.file("p", [TopLevelDecl::Func(func)]);

    let mut full = ScopeDepth::default();
    rewrite_with(&mut fx.ast, Node::File(file), &mut full);
    assert_eq!(full.depth, 0);
    assert_eq!(full.ends, full.visits);
    assert!(full.max_depth >= 5, "max depth {}", full.max_depth);

    let mut pruned = ScopeDepth {
        prune_calls: true,
        ..ScopeDepth::default()
    };
    rewrite_with(&mut fx.ast, Node::File(file), &mut pruned);
    assert_eq!(pruned.depth, 0);
    // The call is visited but not descended: no end call, and `f`, `y` unseen.
    assert_eq!(pruned.visits, full.visits - 2);
    assert_eq!(pruned.ends, pruned.visits - 1);
}

#[test]
fn gen_decl_visits_doc_before_specs_once() {
    let mut fx = Fixture::new();
    let mut b = fx.builder();
    let doc = b.comment_group(&["// answer is fixed"]);
    let one = b.int("1");
    let spec = b.value_spec(&["answer"], None, [one]);
    let decl = b.gen_decl(GenDeclKind::Var, [spec]);
    if let Decl::Gen(gen_decl) = &mut b.ast.decls[decl] {
        gen_decl.doc = Some(doc);
    }

    let mut rec = Recorder {
        names: &fx.names,
        events: Vec::new(),
    };
    rewrite_with(&mut fx.ast, Node::Decl(decl), &mut rec);

    assert_eq!(
        visits(&rec.events),
        [
            "declaration: // answer is fixed\nvar answer = 1",
            "comment group: // answer is fixed",
            "comment: // answer is fixed",
            "spec: answer = 1",
            "identifier: answer",
            "expression: 1",
        ]
    );
}

#[test]
fn file_comment_list_is_not_walked() {
    let mut fx = Fixture::new();
    let mut b = fx.builder();
    let floating = b.comment_group(&["// floating"]);
    let file = b.file("p", []);
    let comments = b.ast.list_comment_group_ids([floating]);
    b.ast.files[file].comments = comments;

    let mut kinds = Vec::new();
    rewrite(&mut fx.ast, Node::File(file), |_, node| {
        kinds.push(node.kind_name());
        (node, true)
    });

    assert_eq!(kinds, ["file", "identifier"]);
}

#[test]
fn package_walks_each_file() {
    let mut fx = Fixture::new();
    let mut b = fx.builder();
    let a = b.file("p", []);
    let c = b.file("p", []);
    let pkg = b.package("p", [a, c]);

    let mut files = Vec::new();
    let out = rewrite(&mut fx.ast, Node::Package(pkg), |_, node| {
        if let Node::File(id) = node {
            files.push(id);
        }
        (node, true)
    });

    assert_eq!(files, [a, c]);
    assert_eq!(out, Node::Package(pkg));
}

#[test]
fn identifier_replacements_are_written_back_into_their_slots() {
    let mut fx = Fixture::new();
    let mut b = fx.builder();
    let one = b.int("1");
    let spec = b.value_spec(&["old"], None, [one]);
    let decl = b.gen_decl(GenDeclKind::Var, [spec]);
    let x = b.name("x");
    let sel = b.selector(x, "old");
    let renamed = fx.names.intern("new");
    let old = fx.names.intern("old");

    let rename = |_: &mut AstArena, node: Node| match node {
        Node::Ident(name) if name.sym == old => (Node::Ident(IdentName::new(renamed)), true),
        _ => (node, true),
    };
    rewrite(&mut fx.ast, Node::Decl(decl), rename);
    rewrite(&mut fx.ast, Node::Expr(sel), rename);

    assert_eq!(fx.print(Node::Decl(decl)), "var new = 1");
    assert_eq!(fx.print(Node::Expr(sel)), "x.new");
}

#[test]
fn expression_replacement_lands_in_list_slot() {
    let mut fx = Fixture::new();
    let mut b = fx.builder();
    let f = b.name("f");
    let (x, y) = (b.name("x"), b.name("y"));
    let call = b.call(f, [x, y]);
    let zero = b.int("0");
    let y_sym = fx.names.intern("y");

    rewrite(&mut fx.ast, Node::Expr(call), |ast, node| match node {
        Node::Expr(id) if matches!(ast.exprs[id], Expr::Ident(n) if n.sym == y_sym) => {
            (Node::Expr(zero), true)
        }
        _ => (node, true),
    });

    assert_eq!(fx.print(Node::Expr(call)), "f(x, 0)");
}

#[test]
fn block_and_spec_replacements_are_accepted() {
    let mut fx = Fixture::new();
    let mut b = fx.builder();
    let cond = b.name("ok");
    let panic_fn = b.name("panic");
    let msg = b.string("boom");
    let call = b.call(panic_fn, [msg]);
    let call = b.expr_stmt(call);
    let then_block = b.block([call]);
    let if_stmt = b.if_stmt(cond, then_block, None);
    let replacement = b.block([]);

    let one = b.int("1");
    let spec = b.value_spec(&["a"], None, [one]);
    let decl = b.gen_decl(GenDeclKind::Const, [spec]);
    let two = b.int("2");
    let new_spec = b.value_spec(&["b"], None, [two]);

    rewrite(&mut fx.ast, Node::Stmt(if_stmt), |_, node| match node {
        Node::Block(_) => (Node::Block(replacement), false),
        _ => (node, true),
    });
    rewrite(&mut fx.ast, Node::Decl(decl), |_, node| match node {
        Node::Spec(Spec::Value(_)) => (Node::Spec(new_spec), true),
        _ => (node, true),
    });

    assert_eq!(fx.print(Node::Stmt(if_stmt)), "if ok {}");
    assert_eq!(fx.print(Node::Decl(decl)), "const b = 2");
}

#[test]
fn root_replacement_is_returned() {
    let mut fx = Fixture::new();
    let mut b = fx.builder();
    let x = b.name("x");
    let y = b.name("y");

    let out = rewrite(&mut fx.ast, Node::Expr(x), |_, node| match node {
        Node::Expr(id) if id == x => (Node::Expr(y), true),
        _ => (node, true),
    });

    assert_eq!(out, Node::Expr(y));
}

#[test]
fn expansion_statements_are_visited_once_when_descending() {
    let mut fx = Fixture::new();
    let mut b = fx.builder();
    let (one, two) = (b.int("1"), b.int("2"));
    let multi = b.short_var_decl(&["a", "b"], [one, two]);
    let f = b.name("f");
    let call = b.call(f, []);
    let tail = b.expr_stmt(call);
    let block = b.block([multi, tail]);

    let mut stmt_visits = Vec::new();
    let out = rewrite(&mut fx.ast, Node::Block(block), |ast, node| {
        if let Node::Stmt(id) = node {
            stmt_visits.push(id);
        }
        split_short_var_decl(ast, node)
    });

    let Node::Block(out) = out else {
        panic!("root changed kind");
    };
    let result = fx.ast.stmts_list(out.stmts).to_vec();
    assert_eq!(result.len(), 3);
    // The original, then the two inserted statements as children of the
    // expanded block, then the untouched sibling.
    assert_eq!(stmt_visits, [multi, result[0], result[1], tail]);
    assert_eq!(result[2], tail);
}

#[test]
fn nested_blocks_expand_at_their_own_visit() {
    let mut fx = Fixture::new();
    let mut b = fx.builder();
    let (one, two) = (b.int("1"), b.int("2"));
    let inner_multi = b.short_var_decl(&["a", "b"], [one, two]);
    let inner = b.block_stmt([inner_multi]);
    let (three, four) = (b.int("3"), b.int("4"));
    let outer_multi = b.short_var_decl(&["c", "d"], [three, four]);
    let block = b.block([inner, outer_multi]);

    let out = rewrite(&mut fx.ast, Node::Block(block), split_short_var_decl);

    assert_eq!(block_len(&fx.ast, out), 3);
    assert_eq!(
        fx.print(out),
        "{\n\t{\n\t\ta := 1\n\t\tb := 2\n\t}\n\tc := 3\n\td := 4\n}"
    );
}

#[test]
fn switch_clause_bodies_accept_expansion() {
    let mut fx = Fixture::new();
    let mut b = fx.builder();
    let (one, two) = (b.int("1"), b.int("2"));
    let multi = b.short_var_decl(&["a", "b"], [one, two]);
    let tag = b.name("k");
    let item = b.int("0");
    let items = b.ast.list_exprs([item]);
    let stmts = b.ast.list_stmts([multi]);
    let clause = b
        .ast
        .switch_clauses
        .alloc(SwitchClause::ExprCase { items, stmts }, Default::default());
    let clauses = b.ast.list_switch_clause_ids([clause]);
    let switch = b.stmt(Stmt::Switch {
        init: None,
        tag: Some(tag),
        clauses,
    });

    rewrite(&mut fx.ast, Node::Stmt(switch), split_short_var_decl);

    assert_eq!(
        fx.print(Node::Stmt(switch)),
        "switch k {\ncase 0:\n\ta := 1\n\tb := 2\n}"
    );
}

#[test]
fn statement_ids_are_hashable_and_each_is_visited_once() {
    let mut fx = Fixture::new();
    let mut b = fx.builder();
    let (one, two) = (b.int("1"), b.int("2"));
    let multi = b.short_var_decl(&["a", "b"], [one, two]);
    let x = b.name("x");
    let ret = b.ret([x]);
    let inner = b.block_stmt([ret]);
    let block = b.block([multi, inner]);

    let mut seen: HashSet<StmtId> = HashSet::new();
    rewrite(&mut fx.ast, Node::Block(block), |ast, node| {
        if let Some(id) = node.as_stmt() {
            assert!(seen.insert(id), "statement {id:?} visited twice");
        }
        split_short_var_decl(ast, node)
    });

    // `multi`, `inner`, `ret`, then the two single declarations as children
    // of the expanded block.
    assert_eq!(seen.len(), 5);
    assert!(seen.contains(&multi) && seen.contains(&inner) && seen.contains(&ret));
}

#[test]
fn closures_see_the_same_visits_as_a_rewriter() {
    let mut fx = Fixture::new();
    let mut b = fx.builder();
    let (f, x) = (b.name("f"), b.name("x"));
    let call = b.call(f, [x]);
    let stmt = b.expr_stmt(call);
    let body = b.block([stmt]);
    let root = Node::Block(body);

    let mut recorder = Recorder {
        names: &fx.names,
        events: Vec::new(),
    };
    let mut ast = fx.ast.clone();
    rewrite_with(&mut ast, root, &mut recorder);

    let mut seen = Vec::new();
    rewrite(&mut fx.ast, root, |ast, node| {
        seen.push(format!("{}: {}", node.kind_name(), print(ast, &fx.names, node)));
        (node, true)
    });

    let ends = recorder.events.iter().filter(|e| *e == "end").count();
    assert_eq!(visits(&recorder.events), seen);
    assert_eq!(ends, seen.len());
}
