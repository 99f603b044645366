//! `Slot` impls: how each kind of child slot is rewritten.
//!
//! Node-kind slots hand their value to the callback and coerce the result
//! back to the slot's type. Statement lists additionally accept an expanded
//! block and splice its statements in place of the statement it replaced.

use crate::ast::*;
use crate::error::{RewriteViolation, fatal};
use crate::node::Node;
use crate::rewrite::{Rewriter, Slot, Walker};

/// Resolves a `ListRef<T>` against the buffer that holds `T`.
pub trait ListSlice<T> {
    /// Length of the buffer `T` lists point into.
    fn buffer_len(&self) -> usize;
    fn list(&self, r: ListRef<T>) -> &[T];
    fn list_mut(&mut self, r: ListRef<T>) -> &mut [T];
}

// `StmtId` lists are left out: they are rewritten by the splicing impl below.
macro_rules! impl_list_slice {
    ($($t:ty => $buf:ident, $get:ident, $get_mut:ident;)*) => {
        $(
            impl ListSlice<$t> for AstArena {
                #[inline(always)]
                fn buffer_len(&self) -> usize {
                    self.extras.$buf.len()
                }

                #[inline(always)]
                fn list(&self, r: ListRef<$t>) -> &[$t] {
                    self.$get(r)
                }

                #[inline(always)]
                fn list_mut(&mut self, r: ListRef<$t>) -> &mut [$t] {
                    self.$get_mut(r)
                }
            }
        )*
    };
}

impl_list_slice! {
    IdentName => ident_names, ident_names, ident_names_mut;
    ExprId => exprs, exprs_list, exprs_list_mut;
    TypeId => types, types_list, types_list_mut;
    FieldId => fields, fields_list, fields_list_mut;
    Spec => specs, specs_list, specs_list_mut;
    KeyedElement => keyed_elems, keyed_elems_list, keyed_elems_list_mut;
    TopLevelDecl => top_decls, top_decls, top_decls_mut;
    SwitchClauseId => switch_clause_ids, switch_clause_ids, switch_clause_ids_mut;
    CommClauseId => comm_clause_ids, comm_clause_ids, comm_clause_ids_mut;
    TypeCaseElem => type_case_elems, type_case_elems, type_case_elems_mut;
    TypeTerm => type_terms, type_terms, type_terms_mut;
    InterfaceElem => interface_elems, interface_elems, interface_elems_mut;
    TypeParamDeclId => type_param_decl_ids, type_param_decl_ids, type_param_decl_ids_mut;
    CommentId => comment_ids, comment_ids, comment_ids_mut;
    CommentGroupId => comment_group_ids, comment_group_ids, comment_group_ids_mut;
    ExprOrType => expr_or_types, expr_or_types, expr_or_types_mut;
    FileId => file_ids, file_ids, file_ids_mut;
}

#[cold]
#[track_caller]
fn violation(slot: &'static str, expected: &'static str, found: Node) -> ! {
    if found.is_expanded_block() {
        fatal(RewriteViolation::MisplacedExpansion { slot });
    }
    fatal(RewriteViolation::SlotMismatch {
        slot,
        expected,
        found: found.kind_name(),
    })
}

/// Aborts unless `r` lies inside a buffer of `buffer_len` items.
#[inline]
#[track_caller]
fn check_list<T>(slot: &'static str, r: ListRef<T>, buffer_len: usize) {
    let end = r.start() as usize + r.len() as usize;
    if end > buffer_len {
        fatal(RewriteViolation::DanglingList {
            slot,
            start: r.start(),
            len: r.len(),
        });
    }
}

macro_rules! node_slots {
    ($($t:ty => $variant:ident;)*) => {
        $(
            impl Slot for $t {
                #[inline]
                fn rewrite_slot<R: Rewriter + ?Sized>(&mut self, slot: &'static str, w: &mut Walker<'_, R>) {
                    let before = Node::$variant(*self);
                    *self = match w.visit(before) {
                        Node::$variant(v) => v,
                        other => violation(slot, before.kind_name(), other),
                    };
                }
            }
        )*
    };
}

node_slots! {
    CommentId => Comment;
    CommentGroupId => CommentGroup;
    FieldId => Field;
    FieldList => FieldList;
    IdentName => Ident;
    BasicLit => BasicLit;
    ExprId => Expr;
    TypeId => Type;
    SignatureId => Signature;
    TypeParamsId => TypeParams;
    TypeParamDeclId => TypeParamDecl;
    SimpleStmtId => SimpleStmt;
    StmtId => Stmt;
    Block => Block;
    SwitchClauseId => SwitchClause;
    CommClauseId => CommClause;
    Spec => Spec;
    DeclId => Decl;
    FuncDeclId => FuncDecl;
    FileId => File;
}

macro_rules! impl_slot_noop {
    ($($t:ty),* $(,)?) => {
        $(
            impl Slot for $t {
                #[inline(always)]
                fn rewrite_slot<R: Rewriter + ?Sized>(&mut self, _: &'static str, _: &mut Walker<'_, R>) {}
            }
        )*
    };
}

impl_slot_noop!(
    Span,
    Symbol,
    bool,
    CommentKind,
    GenDeclKind,
    BasicLitKind,
    ChanDir,
    UnaryOp,
    BinaryOp,
    AssignOp,
    IncDecOp,
);

impl<T: Slot> Slot for Option<T> {
    #[inline]
    fn rewrite_slot<R: Rewriter + ?Sized>(&mut self, slot: &'static str, w: &mut Walker<'_, R>) {
        if let Some(v) = self {
            v.rewrite_slot(slot, w);
        }
    }
}

/// Element-wise rewrite of a list whose length cannot change.
impl<T> Slot for ListRef<T>
where
    AstArena: ListSlice<T>,
    T: Slot + Copy,
{
    fn rewrite_slot<R: Rewriter + ?Sized>(&mut self, slot: &'static str, w: &mut Walker<'_, R>) {
        check_list(slot, *self, <AstArena as ListSlice<T>>::buffer_len(&*w.ast));
        for i in 0..self.len() as usize {
            let mut item = <AstArena as ListSlice<T>>::list(&*w.ast, *self)[i];
            item.rewrite_slot(slot, w);
            <AstArena as ListSlice<T>>::list_mut(&mut *w.ast, *self)[i] = item;
        }
    }
}

/// Statement lists: each statement may come back as an expanded block, whose
/// statements replace it. Spliced statements are not visited again.
///
/// While nothing has been spliced the list is rewritten in place. The first
/// splice copies the already-rewritten prefix into a fresh list, which is
/// pushed to the arena once the walk is done.
impl Slot for ListRef<StmtId> {
    fn rewrite_slot<R: Rewriter + ?Sized>(&mut self, slot: &'static str, w: &mut Walker<'_, R>) {
        let list = *self;
        check_list(slot, list, w.ast.extras.stmts.len());
        let mut spliced: Option<Vec<StmtId>> = None;

        for i in 0..list.len() as usize {
            let stmt = w.ast.stmts_list(list)[i];
            match w.visit(Node::Stmt(stmt)) {
                Node::Stmt(id) => match spliced.as_mut() {
                    Some(out) => out.push(id),
                    None => w.ast.stmts_list_mut(list)[i] = id,
                },
                Node::ExpandedBlock(block) => {
                    check_list(slot, block.stmts, w.ast.extras.stmts.len());
                    let ast = &*w.ast;
                    let inserted = ast.stmts_list(block.stmts);
                    tracing::trace!(slot, index = i, inserted = inserted.len(), "splice");
                    spliced
                        .get_or_insert_with(|| ast.stmts_list(list)[..i].to_vec())
                        .extend_from_slice(inserted);
                }
                other => violation(slot, "statement", other),
            }
        }

        if let Some(out) = spliced {
            *self = w.ast.list_stmts(out);
        }
    }
}
