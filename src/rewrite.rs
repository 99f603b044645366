//! Pre-order, mutating rewriting of the syntax tree.
//!
//! [`rewrite`] hands every node to a callback before its children. The callback
//! returns a replacement and whether to descend into it. A statement that sits
//! in a statement list may be replaced by [`Node::ExpandedBlock`], whose
//! statements are spliced into the list in its place.
//!
//! ```
//! use go_rewrite::ast::{AstArena, Interner, SimpleStmt, Stmt};
//! use go_rewrite::builder::Builder;
//! use go_rewrite::node::Node;
//! use go_rewrite::rewrite::rewrite;
//!
//! let mut ast = AstArena::new();
//! let mut names = Interner::new();
//! let mut b = Builder::new(&mut ast, &mut names);
//! let (zero, one) = (b.int("0"), b.int("1"));
//! let multi = b.short_var_decl(&["x", "y"], [zero, one]);
//! let body = b.block([multi]);
//!
//! // Split `x, y := 0, 1` into one declaration per name.
//! let body = rewrite(&mut ast, Node::Block(body), |ast, node| {
//!     let Some(id) = node.as_stmt() else { return (node, true) };
//!     let Stmt::Simple(simple) = ast.stmts[id] else { return (node, true) };
//!     let SimpleStmt::ShortVarDecl { names, values } = ast.simple_stmts[simple] else {
//!         return (node, true);
//!     };
//!     if names.len() < 2 || names.len() != values.len() {
//!         return (node, true);
//!     }
//!     let pairs: Vec<_> = ast
//!         .ident_names(names)
//!         .iter()
//!         .copied()
//!         .zip(ast.exprs_list(values).iter().copied())
//!         .collect();
//!     let mut singles = Vec::new();
//!     for (name, value) in pairs {
//!         let decl = SimpleStmt::ShortVarDecl {
//!             names: ast.list_ident_names([name]),
//!             values: ast.list_exprs([value]),
//!         };
//!         let simple = ast.simple_stmts.alloc(decl, Default::default());
//!         singles.push(ast.stmts.alloc(Stmt::Simple(simple), Default::default()));
//!     }
//!     (Node::expanded_block(ast, singles), true)
//! });
//!
//! let Node::Block(body) = body else { unreachable!() };
//! assert_eq!(ast.stmts_list(body.stmts).len(), 2);
//! ```

use crate::ast::*;
use crate::error::{RewriteViolation, fatal};
use crate::node::Node;

/// Drives a rewrite.
///
/// `rewrite` sees each node before its children and returns the node to
/// store in its place plus whether to descend into that node. After the
/// children of a descended node are done, `end_children` fires; it pairs with
/// every `rewrite` call that returned `true`, leaves included, so a
/// rewriter can keep a scope stack balanced.
///
/// A replacement must have the kind of the slot it lands in. Returning
/// [`Node::ExpandedBlock`] is only valid for a statement held in a statement
/// list. Anything else aborts the traversal.
pub trait Rewriter {
    fn rewrite(&mut self, ast: &mut AstArena, node: Node) -> (Node, bool);

    #[inline]
    fn end_children(&mut self, ast: &mut AstArena) {
        let _ = ast;
    }
}

struct FnRewriter<F>(F);

impl<F> Rewriter for FnRewriter<F>
where
    F: FnMut(&mut AstArena, Node) -> (Node, bool),
{
    #[inline]
    fn rewrite(&mut self, ast: &mut AstArena, node: Node) -> (Node, bool) {
        (self.0)(ast, node)
    }
}

/// Rewrites `node` and everything under it with the callback `f`.
///
/// Returns the (possibly replaced) root. A closure behaves as a callback that
/// ignores the end-of-children notification: the hook still fires after each
/// descended node, but `f` is not told about it. To observe it, implement
/// [`Rewriter::end_children`] and call [`rewrite_with`].
pub fn rewrite<F>(ast: &mut AstArena, node: Node, f: F) -> Node
where
    F: FnMut(&mut AstArena, Node) -> (Node, bool),
{
    rewrite_with(ast, node, &mut FnRewriter(f))
}

/// Rewrites `node` and everything under it with `rewriter`.
pub fn rewrite_with<R: Rewriter + ?Sized>(ast: &mut AstArena, node: Node, rewriter: &mut R) -> Node {
    tracing::trace!(root = node.kind_name(), "rewrite");
    Walker { ast, rewriter }.visit(node)
}

/// Rewrites the child slots of a node, in surface order.
///
/// Derived with `#[derive(RewriteAst)]` for every AST type.
pub trait RewriteChildren {
    fn rewrite_children<R: Rewriter + ?Sized>(&mut self, w: &mut Walker<'_, R>);
}

/// A value that can occupy a child slot.
///
/// Node kinds go through the callback and are coerced back to the slot's
/// type; glue types walk into their own children; scalars do nothing.
pub trait Slot {
    fn rewrite_slot<R: Rewriter + ?Sized>(&mut self, slot: &'static str, w: &mut Walker<'_, R>);
}

/// Traversal state: the arena being rewritten and the rewriter driving it.
pub struct Walker<'a, R: ?Sized> {
    pub(crate) ast: &'a mut AstArena,
    rewriter: &'a mut R,
}

impl<R: Rewriter + ?Sized> Walker<'_, R> {
    /// Runs the callback on `node` and, unless told otherwise, on its subtree.
    pub fn visit(&mut self, node: Node) -> Node {
        let (mut node, descend) = self.rewriter.rewrite(self.ast, node);
        if !descend {
            return node;
        }
        self.dispatch(&mut node);
        self.rewriter.end_children(self.ast);
        node
    }

    fn dispatch(&mut self, node: &mut Node) {
        match node {
            Node::Comment(id) => self.arena_node(*id),
            Node::CommentGroup(id) => self.arena_node(*id),
            Node::Field(id) => self.arena_node(*id),
            Node::FieldList(list) => list.rewrite_children(self),
            Node::Ident(name) => name.rewrite_children(self),
            Node::BasicLit(lit) => lit.rewrite_children(self),
            Node::Expr(id) => self.arena_node(*id),
            Node::Type(id) => self.arena_node(*id),
            Node::Signature(id) => self.arena_node(*id),
            Node::TypeParams(id) => self.arena_node(*id),
            Node::TypeParamDecl(id) => self.arena_node(*id),
            Node::SimpleStmt(id) => self.arena_node(*id),
            Node::Stmt(id) => self.arena_node(*id),
            Node::Block(block) | Node::ExpandedBlock(block) => block.rewrite_children(self),
            Node::SwitchClause(id) => self.arena_node(*id),
            Node::CommClause(id) => self.arena_node(*id),
            Node::Spec(spec) => spec.rewrite_children(self),
            Node::Decl(id) => self.arena_node(*id),
            Node::FuncDecl(id) => self.arena_node(*id),
            Node::File(id) => self.arena_node(*id),
            Node::Package(pkg) => pkg.rewrite_children(self),
        }
    }

    /// Copies an arena node out, rewrites its slots, and stores it back.
    fn arena_node<T>(&mut self, id: Id<T>)
    where
        AstArena: NodeArena<T>,
        T: RewriteChildren + Copy,
    {
        let mut node = match <AstArena as NodeArena<T>>::nodes(&*self.ast).try_get(id) {
            Some(node) => *node,
            None => fatal(RewriteViolation::DanglingNode {
                kind: <AstArena as NodeArena<T>>::KIND,
                index: id.raw(),
            }),
        };
        node.rewrite_children(self);
        *<AstArena as NodeArena<T>>::nodes_mut(&mut *self.ast).get_mut(id) = node;
    }
}

/// Maps a node type to the arena that stores it.
pub(crate) trait NodeArena<T> {
    const KIND: &'static str;
    fn nodes(&self) -> &SpannedArena<T>;
    fn nodes_mut(&mut self) -> &mut SpannedArena<T>;
}

macro_rules! impl_node_arena {
    ($($t:ty => $field:ident, $kind:literal;)*) => {
        $(
            impl NodeArena<$t> for AstArena {
                const KIND: &'static str = $kind;

                #[inline(always)]
                fn nodes(&self) -> &SpannedArena<$t> {
                    &self.$field
                }

                #[inline(always)]
                fn nodes_mut(&mut self) -> &mut SpannedArena<$t> {
                    &mut self.$field
                }
            }
        )*
    };
}

impl_node_arena! {
    Comment => comments, "comment";
    CommentGroup => comment_groups, "comment group";
    Field => fields, "field";
    Expr => exprs, "expression";
    Type => types, "type";
    Signature => signatures, "signature";
    TypeParams => type_params, "type parameter list";
    TypeParamDecl => type_param_decls, "type parameter declaration";
    SimpleStmt => simple_stmts, "simple statement";
    Stmt => stmts, "statement";
    SwitchClause => switch_clauses, "switch clause";
    CommClause => comm_clauses, "comm clause";
    Decl => decls, "declaration";
    FuncDecl => funcs, "function declaration";
    SourceFile => files, "file";
}
