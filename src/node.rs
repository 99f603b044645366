//! The callback-visible node kinds.
//!
//! `Node` is what a rewrite callback receives and returns. Arena-backed kinds
//! carry their id; inline kinds carry their value, and the rewriter writes the
//! returned value back into the parent's slot.

use crate::ast::*;

/// Any node the rewriter can hand to a callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node {
    Comment(CommentId),
    CommentGroup(CommentGroupId),
    Field(FieldId),
    FieldList(FieldList),
    Ident(IdentName),
    BasicLit(BasicLit),
    Expr(ExprId),
    Type(TypeId),
    /// Function type of literals, declarations and interface methods
    Signature(SignatureId),
    TypeParams(TypeParamsId),
    TypeParamDecl(TypeParamDeclId),
    SimpleStmt(SimpleStmtId),
    Stmt(StmtId),
    Block(Block),
    /// Splice sentinel: returned for a statement that sits in a statement
    /// list, it is replaced by its statements. Never stored in the tree.
    ExpandedBlock(Block),
    SwitchClause(SwitchClauseId),
    CommClause(CommClauseId),
    Spec(Spec),
    Decl(DeclId),
    FuncDecl(FuncDeclId),
    File(FileId),
    Package(Package),
}

impl Node {
    /// Builds the splice sentinel from statements already in the arena.
    pub fn expanded_block(ast: &mut AstArena, stmts: impl IntoIterator<Item = StmtId>) -> Self {
        Node::ExpandedBlock(Block {
            stmts: ast.list_stmts(stmts),
        })
    }

    /// Human-readable kind, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Comment(_) => "comment",
            Node::CommentGroup(_) => "comment group",
            Node::Field(_) => "field",
            Node::FieldList(_) => "field list",
            Node::Ident(_) => "identifier",
            Node::BasicLit(_) => "basic literal",
            Node::Expr(_) => "expression",
            Node::Type(_) => "type",
            Node::Signature(_) => "signature",
            Node::TypeParams(_) => "type parameter list",
            Node::TypeParamDecl(_) => "type parameter declaration",
            Node::SimpleStmt(_) => "simple statement",
            Node::Stmt(_) => "statement",
            Node::Block(_) => "block",
            Node::ExpandedBlock(_) => "expanded block",
            Node::SwitchClause(_) => "switch clause",
            Node::CommClause(_) => "comm clause",
            Node::Spec(_) => "spec",
            Node::Decl(_) => "declaration",
            Node::FuncDecl(_) => "function declaration",
            Node::File(_) => "file",
            Node::Package(_) => "package",
        }
    }

    #[inline]
    pub fn is_expanded_block(&self) -> bool {
        matches!(self, Node::ExpandedBlock(_))
    }

    #[inline]
    pub fn as_expr(&self) -> Option<ExprId> {
        match *self {
            Node::Expr(id) => Some(id),
            _ => None,
        }
    }

    #[inline]
    pub fn as_stmt(&self) -> Option<StmtId> {
        match *self {
            Node::Stmt(id) => Some(id),
            _ => None,
        }
    }

    #[inline]
    pub fn as_simple_stmt(&self) -> Option<SimpleStmtId> {
        match *self {
            Node::SimpleStmt(id) => Some(id),
            _ => None,
        }
    }

    #[inline]
    pub fn as_ident(&self) -> Option<IdentName> {
        match *self {
            Node::Ident(name) => Some(name),
            _ => None,
        }
    }
}

macro_rules! node_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Node {
                #[inline]
                fn from(v: $ty) -> Self {
                    Node::$variant(v)
                }
            }
        )*
    };
}

node_from! {
    CommentId => Comment,
    CommentGroupId => CommentGroup,
    FieldId => Field,
    FieldList => FieldList,
    IdentName => Ident,
    BasicLit => BasicLit,
    ExprId => Expr,
    TypeId => Type,
    SignatureId => Signature,
    TypeParamsId => TypeParams,
    TypeParamDeclId => TypeParamDecl,
    SimpleStmtId => SimpleStmt,
    StmtId => Stmt,
    Block => Block,
    SwitchClauseId => SwitchClause,
    CommClauseId => CommClause,
    Spec => Spec,
    DeclId => Decl,
    FuncDeclId => FuncDecl,
    FileId => File,
    Package => Package,
}
