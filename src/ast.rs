//! # Go syntax tree
//!
//! Arena-allocated AST for Go source, shaped for in-place rewriting.
//!
//! ## Architecture
//!
//! - **Nodes**: every node kind that owns children lives in a typed arena
//!   (`SpannedArena<T>`) and is referenced by a typed `Id<T>`
//! - **Lists**: child lists are `ListRef<T>` handles into centralized buffers
//!   (`ExtraData`), so a node never owns a `Vec`
//! - **Spans**: source positions live in side tables only; node payloads carry
//!   no positions and are all `Copy`
//! - **Symbols**: identifiers and literal text are interned (`Interner`)
//!
//! ## Rewriting
//!
//! `#[derive(RewriteAst)]` generates `impl crate::rewrite::RewriteChildren`,
//! which walks fields in declaration order. Fields below are declared in
//! surface-syntax order for that reason. Types marked `#[rewrite(inline)]` are
//! structural glue that the rewriter walks through without showing them to the
//! callback; see `crate::node::Node` for the callback-visible kinds.

use ast_derive::RewriteAst;
use core::marker::PhantomData;
use core::ops::{Index, IndexMut};
use smallvec::SmallVec;
use std::collections::HashMap;
use std::hash::{BuildHasher, BuildHasherDefault, Hash, Hasher, RandomState};

// =============================================================================
// Core Foundation Types
// =============================================================================

/// Represents a source code span with start and end positions.
///
/// Positions are stored as `u32` to save memory, limiting file size to 4GB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Creates a new span from usize positions.
    ///
    /// # Panics
    /// In debug builds, panics if positions exceed `u32::MAX`.
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= u32::MAX as usize);
        debug_assert!(end <= u32::MAX as usize);
        Self {
            start: start as u32,
            end: end as u32,
        }
    }

    #[inline]
    pub const fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Type-safe identifier for arena-allocated nodes.
///
/// The phantom marker ensures type safety at compile time.
#[derive(Debug, PartialEq, Eq)]
#[repr(transparent)]
pub struct Id<T> {
    raw: u32,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Copy for Id<T> {}

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl<T> Id<T> {
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self {
            raw,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub const fn to_usize(&self) -> usize {
        self.raw as usize
    }

    #[inline]
    pub const fn raw(&self) -> u32 {
        self.raw
    }
}

/// Typed reference into a centralized list buffer.
///
/// Lists are stored in `AstArena::extras`. Each `ListRef` points to a
/// contiguous slice in the appropriate buffer. A list that changes length is
/// re-pushed at the end of its buffer and the owner's handle is replaced; the
/// old segment is simply abandoned.
#[derive(Debug, PartialEq, Eq)]
pub struct ListRef<T> {
    start: u32,
    len: u32,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Copy for ListRef<T> {}

impl<T> Clone for ListRef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Default for ListRef<T> {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl<T> ListRef<T> {
    /// Empty list constant.
    pub const EMPTY: Self = Self {
        start: 0,
        len: 0,
        _marker: PhantomData,
    };

    #[inline]
    pub const fn new(start: u32, len: u32) -> Self {
        Self {
            start,
            len,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub const fn start(&self) -> u32 {
        self.start
    }

    #[inline]
    pub const fn len(&self) -> u32 {
        self.len
    }

    /// Returns the end index (exclusive).
    #[inline]
    pub const fn end(&self) -> u32 {
        self.start + self.len
    }
}

// =============================================================================
// Symbol Interning System
// =============================================================================

/// Interned string symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Symbol(u32);

/// Type alias for identifier symbols.
pub type Ident = Symbol;

impl Symbol {
    #[inline]
    pub const fn from_raw(v: u32) -> Self {
        Self(v)
    }

    #[inline]
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

/// Identifier occurrence: the identifier node of the tree.
///
/// Every slot that the grammar types as "identifier" (labels, selectors,
/// declared names) holds one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, RewriteAst)]
pub struct IdentName {
    pub sym: Ident,
    pub pos: Span,
}

impl IdentName {
    #[inline]
    pub const fn new(sym: Ident) -> Self {
        Self {
            sym,
            pos: Span { start: 0, end: 0 },
        }
    }
}

/// Identity hasher for u64 values (used for symbol hash buckets).
#[derive(Default)]
struct U64IdentityHasher(u64);

impl Hasher for U64IdentityHasher {
    fn write(&mut self, _b: &[u8]) {
        unreachable!("U64IdentityHasher only supports write_u64")
    }

    #[inline]
    fn write_u64(&mut self, i: u64) {
        self.0 = i;
    }

    #[inline]
    fn finish(&self) -> u64 {
        self.0
    }
}

type U64IdentityBuild = BuildHasherDefault<U64IdentityHasher>;

/// String interner for identifiers, literal text, and comment text.
///
/// Uses a seeded random hasher for security against hash collision attacks.
#[derive(Debug, Default)]
pub struct Interner {
    strings: Vec<Box<str>>,
    buckets: HashMap<u64, SmallVec<[Symbol; 1]>, U64IdentityBuild>,
    state: RandomState,
}

impl Interner {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Interns a string and returns its symbol.
    ///
    /// If the string already exists, returns the existing symbol.
    pub fn intern(&mut self, s: &str) -> Symbol {
        let h = self.state.hash_one(s);
        let entry = self.buckets.entry(h).or_default();

        for &sym in entry.iter() {
            if self.strings[sym.0 as usize].as_ref() == s {
                return sym;
            }
        }

        let sym = Symbol(self.strings.len() as u32);
        self.strings.push(s.into());
        entry.push(sym);
        sym
    }

    /// Returns the symbol for `s` if it was interned before.
    pub fn get(&self, s: &str) -> Option<Symbol> {
        let h = self.state.hash_one(s);
        self.buckets
            .get(&h)?
            .iter()
            .copied()
            .find(|sym| self.strings[sym.0 as usize].as_ref() == s)
    }

    /// Resolves a symbol back to its string.
    ///
    /// # Panics
    /// Panics if the symbol did not come from this interner.
    #[inline]
    pub fn resolve(&self, sym: Symbol) -> &str {
        self.strings
            .get(sym.0 as usize)
            .expect("invalid symbol")
            .as_ref()
    }
}

// =============================================================================
// Arena Allocation
// =============================================================================

/// Arena for nodes with associated spans.
///
/// Stores nodes and their spans in parallel vectors for cache efficiency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpannedArena<T> {
    data: Vec<T>,
    spans: Vec<Span>,
}

impl<T> Default for SpannedArena<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            spans: Vec::new(),
        }
    }
}

impl<T> SpannedArena<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a node with its span and returns an ID.
    #[inline]
    pub fn alloc(&mut self, node: T, span: Span) -> Id<T> {
        let id = Id::from_raw(self.data.len() as u32);
        self.data.push(node);
        self.spans.push(span);
        id
    }

    #[inline]
    pub fn get(&self, id: Id<T>) -> &T {
        &self.data[id.to_usize()]
    }

    /// Like `get`, but `None` for an id this arena never handed out.
    #[inline]
    pub fn try_get(&self, id: Id<T>) -> Option<&T> {
        self.data.get(id.to_usize())
    }

    #[inline]
    pub fn get_mut(&mut self, id: Id<T>) -> &mut T {
        &mut self.data[id.to_usize()]
    }

    #[inline]
    pub fn span(&self, id: Id<T>) -> Span {
        self.spans[id.to_usize()]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
        self.spans.reserve(additional);
    }
}

impl<T> Index<Id<T>> for SpannedArena<T> {
    type Output = T;
    fn index(&self, id: Id<T>) -> &T {
        self.get(id)
    }
}

impl<T> IndexMut<Id<T>> for SpannedArena<T> {
    fn index_mut(&mut self, id: Id<T>) -> &mut T {
        self.get_mut(id)
    }
}

// =============================================================================
// Type Aliases for Node IDs
// =============================================================================

pub type DeclId = Id<Decl>;
pub type StmtId = Id<Stmt>;
pub type SimpleStmtId = Id<SimpleStmt>;
pub type ExprId = Id<Expr>;
pub type TypeId = Id<Type>;
pub type FieldId = Id<Field>;
pub type SignatureId = Id<Signature>;
pub type FuncDeclId = Id<FuncDecl>;
pub type SwitchClauseId = Id<SwitchClause>;
pub type CommClauseId = Id<CommClause>;
pub type TypeParamsId = Id<TypeParams>;
pub type TypeParamDeclId = Id<TypeParamDecl>;
pub type CommentId = Id<Comment>;
pub type CommentGroupId = Id<CommentGroup>;
pub type FileId = Id<SourceFile>;

// =============================================================================
// Centralized List Storage
// =============================================================================

/// Extra data storage for all list types.
///
/// This structure holds all the centralized buffers that `ListRef<T>` points into.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtraData {
    pub ident_names: Vec<IdentName>,
    pub exprs: Vec<ExprId>,
    pub stmts: Vec<StmtId>,
    pub types: Vec<TypeId>,
    pub fields: Vec<FieldId>,
    pub specs: Vec<Spec>,
    pub keyed_elems: Vec<KeyedElement>,
    pub top_decls: Vec<TopLevelDecl>,
    pub switch_clause_ids: Vec<SwitchClauseId>,
    pub comm_clause_ids: Vec<CommClauseId>,
    pub type_case_elems: Vec<TypeCaseElem>,
    pub type_terms: Vec<TypeTerm>,
    pub interface_elems: Vec<InterfaceElem>,
    pub type_param_decl_ids: Vec<TypeParamDeclId>,
    pub comment_ids: Vec<CommentId>,
    pub comment_group_ids: Vec<CommentGroupId>,
    pub expr_or_types: Vec<ExprOrType>,
    pub file_ids: Vec<FileId>,
}

// =============================================================================
// Main AST Arena
// =============================================================================

/// Central arena holding all AST nodes and list buffers.
///
/// The caller owns the arena for the whole life of the tree; the rewriter
/// borrows it mutably for the duration of one traversal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AstArena {
    pub decls: SpannedArena<Decl>,
    pub stmts: SpannedArena<Stmt>,
    pub simple_stmts: SpannedArena<SimpleStmt>,
    pub exprs: SpannedArena<Expr>,
    pub types: SpannedArena<Type>,
    pub signatures: SpannedArena<Signature>,
    pub funcs: SpannedArena<FuncDecl>,
    pub fields: SpannedArena<Field>,
    pub switch_clauses: SpannedArena<SwitchClause>,
    pub comm_clauses: SpannedArena<CommClause>,
    pub type_params: SpannedArena<TypeParams>,
    pub type_param_decls: SpannedArena<TypeParamDecl>,
    pub comments: SpannedArena<Comment>,
    pub comment_groups: SpannedArena<CommentGroup>,
    pub files: SpannedArena<SourceFile>,
    pub extras: ExtraData,
}

/// Generates a list builder, a shared accessor and a mutable accessor per buffer.
macro_rules! list_buffers {
    ($($t:ty => $buf:ident, $build:ident, $get:ident, $get_mut:ident;)*) => {
        impl AstArena {
            $(
                pub fn $build(&mut self, i: impl IntoIterator<Item = $t>) -> ListRef<$t> {
                    Self::push_list(&mut self.extras.$buf, i)
                }

                pub fn $get(&self, r: ListRef<$t>) -> &[$t] {
                    Self::slice(&self.extras.$buf, r)
                }

                pub fn $get_mut(&mut self, r: ListRef<$t>) -> &mut [$t] {
                    Self::slice_mut(&mut self.extras.$buf, r)
                }
            )*
        }
    };
}

impl AstArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Helper to push items into a buffer and return a typed list reference.
    #[inline]
    fn push_list<T>(buf: &mut Vec<T>, items: impl IntoIterator<Item = T>) -> ListRef<T> {
        let start = buf.len();
        buf.extend(items);
        let len = buf.len() - start;
        debug_assert!(start <= u32::MAX as usize);
        debug_assert!(len <= u32::MAX as usize);
        if len == 0 {
            return ListRef::EMPTY;
        }
        ListRef::new(start as u32, len as u32)
    }

    #[inline]
    fn slice<T>(buf: &[T], r: ListRef<T>) -> &[T] {
        &buf[r.start() as usize..r.end() as usize]
    }

    #[inline]
    fn slice_mut<T>(buf: &mut [T], r: ListRef<T>) -> &mut [T] {
        &mut buf[r.start() as usize..r.end() as usize]
    }
}

list_buffers! {
    IdentName => ident_names, list_ident_names, ident_names, ident_names_mut;
    ExprId => exprs, list_exprs, exprs_list, exprs_list_mut;
    StmtId => stmts, list_stmts, stmts_list, stmts_list_mut;
    TypeId => types, list_types, types_list, types_list_mut;
    FieldId => fields, list_fields, fields_list, fields_list_mut;
    Spec => specs, list_specs, specs_list, specs_list_mut;
    KeyedElement => keyed_elems, list_keyed_elems, keyed_elems_list, keyed_elems_list_mut;
    TopLevelDecl => top_decls, list_top_decls, top_decls, top_decls_mut;
    SwitchClauseId => switch_clause_ids, list_switch_clause_ids, switch_clause_ids, switch_clause_ids_mut;
    CommClauseId => comm_clause_ids, list_comm_clause_ids, comm_clause_ids, comm_clause_ids_mut;
    TypeCaseElem => type_case_elems, list_type_cases, type_case_elems, type_case_elems_mut;
    TypeTerm => type_terms, list_type_terms, type_terms, type_terms_mut;
    InterfaceElem => interface_elems, list_interface_elems, interface_elems, interface_elems_mut;
    TypeParamDeclId => type_param_decl_ids, list_type_param_decl_ids, type_param_decl_ids, type_param_decl_ids_mut;
    CommentId => comment_ids, list_comment_ids, comment_ids, comment_ids_mut;
    CommentGroupId => comment_group_ids, list_comment_group_ids, comment_group_ids, comment_group_ids_mut;
    ExprOrType => expr_or_types, list_expr_or_types, expr_or_types, expr_or_types_mut;
    FileId => file_ids, list_file_ids, file_ids, file_ids_mut;
}

// =============================================================================
// Comments
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentKind {
    Line,
    Block,
}

/// Comment token; `text` includes the `//` or `/* */` markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, RewriteAst)]
pub struct Comment {
    pub kind: CommentKind,
    pub text: Symbol,
}

/// Group of adjacent comments (doc, directives, etc.).
#[derive(Debug, Clone, Copy, PartialEq, Eq, RewriteAst)]
pub struct CommentGroup {
    pub comments: ListRef<CommentId>,
}

// =============================================================================
// Packages and Source Files
// =============================================================================

/// A set of files forming one package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, RewriteAst)]
pub struct Package {
    pub name: Symbol,
    pub files: ListRef<FileId>,
}

/// Represents a complete Go source file.
///
/// ```text
/// SourceFile = PackageClause ";" { ImportDecl ";" } { TopLevelDecl ";" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, RewriteAst)]
pub struct SourceFile {
    /// Package doc comment group
    pub doc: Option<CommentGroupId>,
    /// Package name
    pub name: IdentName,
    /// All top-level declarations in source order
    pub decls: ListRef<TopLevelDecl>,
    /// Every comment group in the file. Not walked: the groups are reached
    /// through the nodes they document.
    #[rewrite(skip)]
    pub comments: ListRef<CommentGroupId>,
}

// =============================================================================
// Declarations
// =============================================================================

/// Top-level declaration (can be a general declaration or function).
#[derive(Debug, Clone, Copy, PartialEq, Eq, RewriteAst)]
#[rewrite(inline)]
pub enum TopLevelDecl {
    Decl(DeclId),
    Func(FuncDeclId),
}

/// General declaration node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, RewriteAst)]
pub enum Decl {
    Gen(GenDecl),
    Bad,
}

/// Generic declaration (import, const, type, var).
///
/// ```text
/// Declaration   = ConstDecl | TypeDecl | VarDecl
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, RewriteAst)]
#[rewrite(inline)]
pub struct GenDecl {
    pub doc: Option<CommentGroupId>,
    pub kind: GenDeclKind,
    /// True for the parenthesized form `var ( ... )`
    pub grouped: bool,
    pub specs: ListRef<Spec>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum GenDeclKind {
    Import,
    Const,
    Type,
    Var,
}

/// Specification within a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, RewriteAst)]
pub enum Spec {
    Import(ImportSpec),
    Value(ValueSpec),
    Type(TypeSpec),
}

/// Import specification.
///
/// `ImportSpec = [ "." | PackageName ] ImportPath`; dot and blank imports use
/// the identifiers `.` and `_`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, RewriteAst)]
#[rewrite(inline)]
pub struct ImportSpec {
    pub doc: Option<CommentGroupId>,
    pub name: Option<IdentName>,
    pub path: BasicLit,
    pub comment: Option<CommentGroupId>,
}

/// Value specification (const or var).
///
/// ```text
/// ConstSpec = IdentifierList [ [ Type ] "=" ExpressionList ]
/// VarSpec   = IdentifierList ( Type [ "=" ExpressionList ] | "=" ExpressionList )
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, RewriteAst)]
#[rewrite(inline)]
pub struct ValueSpec {
    pub doc: Option<CommentGroupId>,
    pub names: ListRef<IdentName>,
    pub typ: Option<TypeId>,
    pub values: ListRef<ExprId>,
    pub comment: Option<CommentGroupId>,
}

/// Type specification: `TypeSpec = AliasDecl | TypeDef`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, RewriteAst)]
#[rewrite(inline)]
pub struct TypeSpec {
    pub doc: Option<CommentGroupId>,
    pub name: IdentName,
    pub type_params: Option<TypeParamsId>,
    /// True for `type A = B`
    pub alias: bool,
    pub typ: TypeId,
    pub comment: Option<CommentGroupId>,
}

/// Function or method declaration.
///
/// ```text
/// FunctionDecl = "func" FunctionName [ TypeParameters ] Signature [ FunctionBody ]
/// MethodDecl   = "func" Receiver MethodName Signature [ FunctionBody ]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, RewriteAst)]
pub struct FuncDecl {
    pub doc: Option<CommentGroupId>,
    /// Receiver (present only for methods)
    pub recv: Option<FieldList>,
    pub name: IdentName,
    /// Type parameters (only for functions, not methods)
    pub type_params: Option<TypeParamsId>,
    pub signature: SignatureId,
    /// Function body (None for external declarations)
    pub body: Option<Block>,
}

// =============================================================================
// Generics: Type Parameters and Constraints
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, RewriteAst)]
pub struct TypeParams {
    pub params: ListRef<TypeParamDeclId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, RewriteAst)]
pub struct TypeParamDecl {
    pub names: ListRef<IdentName>,
    pub constraint: TypeConstraint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, RewriteAst)]
#[rewrite(inline)]
pub enum TypeConstraint {
    Any,
    TypeElem(TypeElem),
    Interface(TypeId),
}

/// Syntactic type element: `TypeTerm { "|" TypeTerm }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, RewriteAst)]
#[rewrite(inline)]
pub struct TypeElem {
    pub terms: ListRef<TypeTerm>,
}

// =============================================================================
// Signatures and Fields
// =============================================================================

/// Function signature: the function type of literals, declarations and
/// interface methods.
///
/// `Signature = Parameters [ Result ]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, RewriteAst)]
pub struct Signature {
    pub params: FieldList,
    pub results: Option<Results>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, RewriteAst)]
#[rewrite(inline)]
pub enum Results {
    /// Parenthesized results: `(x int, err error)` or `(int, error)`
    Params(FieldList),
    /// Single unnamed result: `int`
    Type(TypeId),
}

/// Field list (parameters, results, receivers, struct fields).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, RewriteAst)]
pub struct FieldList {
    pub fields: ListRef<FieldId>,
}

/// Field in a parameter list or struct.
///
/// `ParameterDecl = [ IdentifierList ] [ "..." ] Type`
#[derive(Debug, Clone, Copy, PartialEq, Eq, RewriteAst)]
pub struct Field {
    pub doc: Option<CommentGroupId>,
    /// Field names (empty for anonymous or embedded fields)
    pub names: ListRef<IdentName>,
    /// True for a variadic `...T` parameter
    pub variadic: bool,
    pub typ: TypeId,
    /// Struct tag (struct fields only)
    pub tag: Option<BasicLit>,
    pub comment: Option<CommentGroupId>,
}

// =============================================================================
// Statements
// =============================================================================

/// Simple statement (also used in for/if/switch headers).
///
/// `SimpleStmt = EmptyStmt | ExpressionStmt | SendStmt | IncDecStmt | Assignment | ShortVarDecl`
#[derive(Debug, Clone, Copy, PartialEq, Eq, RewriteAst)]
pub enum SimpleStmt {
    Empty,
    Expr(ExprId),

    /// Send statement: `chan <- value`
    Send { chan: ExprId, value: ExprId },

    /// Increment/decrement: `x++` or `x--`
    IncDec { expr: ExprId, op: IncDecOp },

    /// Assignment: `x = y` or `x += y`
    Assign {
        lhs: ListRef<ExprId>,
        op: AssignOp,
        rhs: ListRef<ExprId>,
    },

    /// Short variable declaration: `x := y`
    ShortVarDecl {
        names: ListRef<IdentName>,
        values: ListRef<ExprId>,
    },
}

/// Statement node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, RewriteAst)]
pub enum Stmt {
    Simple(SimpleStmtId),
    Decl(DeclId),

    /// Labeled statement: `label: stmt`
    Labeled { label: IdentName, stmt: StmtId },

    /// Go statement: `go f()`
    Go { call: ExprId },

    /// Defer statement: `defer f()`
    Defer { call: ExprId },

    /// Return statement: `return [expr, ...]`
    Return { results: ListRef<ExprId> },

    /// Branch statement (break, continue, goto, fallthrough)
    Branch(BranchStmt),

    /// Block statement: `{ ... }`
    Block { stmts: ListRef<StmtId> },

    If {
        init: Option<SimpleStmtId>,
        cond: ExprId,
        then_block: Block,
        /// Either another `If` or a `Block` statement
        else_stmt: Option<StmtId>,
    },

    For { kind: ForKind, block: Block },

    Switch {
        init: Option<SimpleStmtId>,
        tag: Option<ExprId>,
        clauses: ListRef<SwitchClauseId>,
    },

    TypeSwitch {
        init: Option<SimpleStmtId>,
        guard: TypeSwitchGuard,
        clauses: ListRef<SwitchClauseId>,
    },

    Select { clauses: ListRef<CommClauseId> },

    /// Bad statement (error recovery)
    Bad,
}

/// For loop header variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, RewriteAst)]
#[rewrite(inline)]
pub enum ForKind {
    /// Infinite loop: `for { ... }`
    Infinite,

    /// Condition loop: `for cond { ... }`
    Cond(ExprId),

    /// Three-clause loop: `for init; cond; post { ... }`
    Clause {
        init: Option<SimpleStmtId>,
        cond: Option<ExprId>,
        post: Option<SimpleStmtId>,
    },

    /// Range loop: `for k, v := range x { ... }`; key and value are absent in
    /// `for range x`.
    Range {
        key: Option<ExprId>,
        value: Option<ExprId>,
        /// `:=` rather than `=`
        define: bool,
        expr: ExprId,
    },
}

/// Switch or type switch case clause; an empty item list is `default:`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, RewriteAst)]
pub enum SwitchClause {
    ExprCase {
        items: ListRef<ExprId>,
        stmts: ListRef<StmtId>,
    },

    TypeCase {
        items: ListRef<TypeCaseElem>,
        stmts: ListRef<StmtId>,
    },
}

/// Select clause: `case <comm>:` or, with no `comm`, `default:`.
///
/// The communication is a send, a receive expression, or an assignment /
/// short variable declaration whose right-hand side is a receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, RewriteAst)]
pub struct CommClause {
    pub comm: Option<SimpleStmtId>,
    pub stmts: ListRef<StmtId>,
}

/// Branch statement (break, continue, goto, fallthrough).
#[derive(Debug, Clone, Copy, PartialEq, Eq, RewriteAst)]
#[rewrite(inline)]
pub enum BranchStmt {
    Break { label: Option<IdentName> },
    Continue { label: Option<IdentName> },
    Goto { label: IdentName },
    Fallthrough,
}

/// Block of statements.
///
/// `Block = "{" StatementList "}"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, RewriteAst)]
pub struct Block {
    pub stmts: ListRef<StmtId>,
}

/// Type switch guard: `[ identifier ":=" ] PrimaryExpr "." "(" "type" ")"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, RewriteAst)]
#[rewrite(inline)]
pub struct TypeSwitchGuard {
    pub bind: Option<IdentName>,
    pub x: ExprId,
}

// =============================================================================
// Expressions
// =============================================================================

/// Literal value (composite literal element list).
///
/// `LiteralValue = "{" [ ElementList [ "," ] ] "}"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, RewriteAst)]
#[rewrite(inline)]
pub struct LiteralValue {
    pub elements: ListRef<KeyedElement>,
}

/// `KeyedElement = [ Key ":" ] Element`
#[derive(Debug, Clone, Copy, PartialEq, Eq, RewriteAst)]
#[rewrite(inline)]
pub struct KeyedElement {
    pub key: Option<Key>,
    pub value: Element,
}

/// `Key = FieldName | Expression | LiteralValue`
#[derive(Debug, Clone, Copy, PartialEq, Eq, RewriteAst)]
#[rewrite(inline)]
pub enum Key {
    /// Field name in struct literal: `Person{Name: "Alice"}`
    FieldName(IdentName),
    /// Expression key: `map[string]int{"key": 1}`
    Expr(ExprId),
    /// Nested literal: `map[[2]int]bool{{1, 2}: true}`
    Literal(LiteralValue),
}

/// `Element = Expression | LiteralValue`
#[derive(Debug, Clone, Copy, PartialEq, Eq, RewriteAst)]
#[rewrite(inline)]
pub enum Element {
    Expr(ExprId),
    Literal(LiteralValue),
}

/// Bracket list item that may be an expression (index) or a type (type args).
#[derive(Debug, Clone, Copy, PartialEq, Eq, RewriteAst)]
#[rewrite(inline)]
pub enum ExprOrType {
    Expr(ExprId),
    Type(TypeId),
}

/// Call callee may be an expression or a type (conversion).
#[derive(Debug, Clone, Copy, PartialEq, Eq, RewriteAst)]
#[rewrite(inline)]
pub enum CallCallee {
    Expr(ExprId),
    Type(TypeId),
}

/// Expression node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, RewriteAst)]
pub enum Expr {
    /// Plain identifier; a leaf, its name is not a separate slot
    #[rewrite(skip)]
    Ident(IdentName),

    /// Basic literal (int, float, string, etc.); a leaf
    #[rewrite(skip)]
    BasicLit(BasicLit),

    /// Function literal: `func(x int) int { return x }`
    FuncLit { sig: SignatureId, body: Block },

    /// Composite literal: `T{...}`
    CompositeLit { typ: TypeId, lit: LiteralValue },

    /// Bracket list: either indexing (`a[i]`) or generic instantiation (`F[T]`)
    IndexOrInstantiate {
        base: ExprId,
        args: ListRef<ExprOrType>,
    },

    /// Parenthesized expression: `(x)`
    Paren { expr: ExprId },

    /// Selector: `x.y`
    Selector { expr: ExprId, sel: IdentName },

    /// Slice expression: `a[lo:hi]` or `a[lo:hi:max]`
    Slice {
        expr: ExprId,
        lo: Option<ExprId>,
        hi: Option<ExprId>,
        max: Option<ExprId>,
    },

    /// Type assertion: `x.(T)`, or `x.(type)` in a type switch when `typ` is absent
    TypeAssert { expr: ExprId, typ: Option<TypeId> },

    /// Function call or conversion: `f(args...)` or `T(x)`
    Call {
        callee: CallCallee,
        /// Type argument for builtins: `make(T, ...)`, `new(T)`
        type_arg: Option<TypeId>,
        args: ListRef<ExprId>,
        /// Variadic call: `f(xs...)`
        ellipsis: bool,
    },

    /// Unary expression: `+x`, `-x`, `!x`, `^x`, `*x`, `&x`, `<-x`
    Unary { op: UnaryOp, expr: ExprId },

    /// Binary expression: `x + y`, `x && y`, etc.
    Binary {
        left: ExprId,
        op: BinaryOp,
        right: ExprId,
    },

    /// Method expression: `T.Method`
    MethodExpr { recv: TypeId, name: IdentName },

    /// Bad expression (error recovery)
    Bad,
}

/// Basic literal; `value` is the literal's source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, RewriteAst)]
pub struct BasicLit {
    pub kind: BasicLitKind,
    pub value: Symbol,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum BasicLitKind {
    Int,
    Float,
    Imag,
    Rune,
    String,
}

// =============================================================================
// Types
// =============================================================================

/// Type node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, RewriteAst)]
pub enum Type {
    /// Named type: `pkg.Name` or `Name[T]`
    Named {
        pkg: Option<IdentName>,
        name: IdentName,
        args: ListRef<TypeId>,
    },

    /// Pointer type: `*T`
    Pointer { elem: TypeId },

    /// Array type: `[N]T`
    Array { len: ArrayLen, elem: TypeId },

    /// Slice type: `[]T`
    Slice { elem: TypeId },

    /// Map type: `map[K]V`
    Map { key: TypeId, val: TypeId },

    /// Channel type: `chan T`, `<-chan T`, or `chan<- T`
    Chan { dir: ChanDir, elem: TypeId },

    /// Struct type: `struct { ... }`
    Struct { fields: FieldList },

    /// Interface type: `interface { ... }`
    Interface { elems: ListRef<InterfaceElem> },

    /// Function type: `func(...) ...`
    Func { sig: SignatureId },

    /// Parenthesized type: `(T)`
    Paren { typ: TypeId },

    /// Bad type (error recovery)
    Bad,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, RewriteAst)]
#[rewrite(inline)]
pub enum ArrayLen {
    /// Fixed length: `[10]int`
    Expr(ExprId),
    /// Inferred length: `[...]int`
    Ellipsis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChanDir {
    /// Bidirectional: `chan T`
    Both,
    /// Send-only: `chan<- T`
    Send,
    /// Receive-only: `<-chan T`
    Recv,
}

/// Type case element (in type switch).
#[derive(Debug, Clone, Copy, PartialEq, Eq, RewriteAst)]
#[rewrite(inline)]
pub enum TypeCaseElem {
    Type(TypeId),
    Nil,
}

/// Type term in a union.
#[derive(Debug, Clone, Copy, PartialEq, Eq, RewriteAst)]
#[rewrite(inline)]
pub enum TypeTerm {
    /// Approximate type: `~T`
    Tilde { typ: TypeId },
    /// Exact type: `T`
    Type { typ: TypeId },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, RewriteAst)]
#[rewrite(inline)]
pub enum InterfaceElem {
    /// Method specification: `Method(...) ...`
    Method { name: IdentName, sig: SignatureId },

    /// Embedded type (`io.Reader`) or union (`int | ~float64`)
    TypeElem(TypeElem),
}

// =============================================================================
// Operators
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Add,   // +
    Sub,   // -
    Not,   // !
    Xor,   // ^
    Deref, // *
    Addr,  // &
    Recv,  // <-
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,    // +
    Sub,    // -
    Mul,    // *
    Div,    // /
    Mod,    // %
    And,    // &
    Or,     // |
    Xor,    // ^
    Shl,    // <<
    Shr,    // >>
    AndNot, // &^
    LAnd,   // &&
    LOr,    // ||
    Eq,     // ==
    Ne,     // !=
    Lt,     // <
    Le,     // <=
    Gt,     // >
    Ge,     // >=
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOp {
    Assign,       // =
    AddAssign,    // +=
    SubAssign,    // -=
    MulAssign,    // *=
    DivAssign,    // /=
    ModAssign,    // %=
    AndAssign,    // &=
    OrAssign,     // |=
    XorAssign,    // ^=
    ShlAssign,    // <<=
    ShrAssign,    // >>=
    AndNotAssign, // &^=
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncDecOp {
    Inc, // ++
    Dec, // --
}
