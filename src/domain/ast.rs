// AST data structures for pathctx.
// These types represent parsed Rust code in a form suitable for path-context extraction.

use std::fmt;

/// A node in the abstract syntax tree.
///
/// Nodes are compared by identity (address) during extraction, never structurally,
/// so this type deliberately does not implement `PartialEq`.
#[derive(Debug, Clone)]
pub struct AstNode {
    pub kind: AstNodeKind,
    pub children: Vec<AstNode>,
}

/// Syntactic categories of the lowered tree.
///
/// The set is closed: every construct the parser produces maps to exactly one
/// variant, and operator-bearing categories carry their operator symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AstNodeKind {
    // Items
    File,
    Mod,
    Impl,
    Trait,
    Item,
    FunctionDecl,
    Generics,
    TypeParam,
    ConstParam,
    Params,
    Param,
    Receiver,
    Results,
    ConstDecl,
    StaticDecl,

    // Statements and control flow
    Block,
    LetStmt,
    Return,
    If,
    While,
    ForLoop,
    Loop,
    Match,
    Arm,
    Guard,
    Break,
    Continue,
    Yield,

    // Expressions
    BinaryExpr(&'static str),
    UnaryExpr(&'static str),
    AssignExpr(&'static str),
    Call,
    MethodCall,
    MacroCall,
    Closure,
    FieldAccess,
    Index,
    Range,
    Cast,
    Try,
    Await,
    Paren,
    Tuple,
    Array,
    Repeat,
    StructLit,
    FieldValue,
    Path,
    GenericArgs,
    AssocType,
    AsyncBlock,
    LetExpr,
    Infer,

    // Patterns
    TuplePat,
    TupleStructPat,
    StructPat,
    FieldPat,
    SlicePat,
    OrPat,
    RefPat,
    RangePat,
    RestPat,
    WildPat,
    TypedPat,
    BindingPat,

    // Types
    RefType,
    PtrType,
    SliceType,
    ArrayType,
    TupleType,
    FnType,
    TraitObject,
    ImplTrait,
    TraitBound,
    NeverType,
    InferType,

    // Terminals
    Ident(String),
    Lit(String),

    /// Anything the lowering does not model (verbatim tokens, future syntax).
    Unknown,
}

impl AstNodeKind {
    /// Category name without operator or token text.
    pub fn name(&self) -> &'static str {
        match self {
            Self::File => "File",
            Self::Mod => "Mod",
            Self::Impl => "Impl",
            Self::Trait => "Trait",
            Self::Item => "Item",
            Self::FunctionDecl => "FunctionDecl",
            Self::Generics => "Generics",
            Self::TypeParam => "TypeParam",
            Self::ConstParam => "ConstParam",
            Self::Params => "Params",
            Self::Param => "Param",
            Self::Receiver => "Receiver",
            Self::Results => "Results",
            Self::ConstDecl => "ConstDecl",
            Self::StaticDecl => "StaticDecl",
            Self::Block => "Block",
            Self::LetStmt => "LetStmt",
            Self::Return => "Return",
            Self::If => "If",
            Self::While => "While",
            Self::ForLoop => "ForLoop",
            Self::Loop => "Loop",
            Self::Match => "Match",
            Self::Arm => "Arm",
            Self::Guard => "Guard",
            Self::Break => "Break",
            Self::Continue => "Continue",
            Self::Yield => "Yield",
            Self::BinaryExpr(_) => "BinaryExpr",
            Self::UnaryExpr(_) => "UnaryExpr",
            Self::AssignExpr(_) => "AssignExpr",
            Self::Call => "Call",
            Self::MethodCall => "MethodCall",
            Self::MacroCall => "MacroCall",
            Self::Closure => "Closure",
            Self::FieldAccess => "FieldAccess",
            Self::Index => "Index",
            Self::Range => "Range",
            Self::Cast => "Cast",
            Self::Try => "Try",
            Self::Await => "Await",
            Self::Paren => "Paren",
            Self::Tuple => "Tuple",
            Self::Array => "Array",
            Self::Repeat => "Repeat",
            Self::StructLit => "StructLit",
            Self::FieldValue => "FieldValue",
            Self::Path => "Path",
            Self::GenericArgs => "GenericArgs",
            Self::AssocType => "AssocType",
            Self::AsyncBlock => "AsyncBlock",
            Self::LetExpr => "LetExpr",
            Self::Infer => "Infer",
            Self::TuplePat => "TuplePat",
            Self::TupleStructPat => "TupleStructPat",
            Self::StructPat => "StructPat",
            Self::FieldPat => "FieldPat",
            Self::SlicePat => "SlicePat",
            Self::OrPat => "OrPat",
            Self::RefPat => "RefPat",
            Self::RangePat => "RangePat",
            Self::RestPat => "RestPat",
            Self::WildPat => "WildPat",
            Self::TypedPat => "TypedPat",
            Self::BindingPat => "BindingPat",
            Self::RefType => "RefType",
            Self::PtrType => "PtrType",
            Self::SliceType => "SliceType",
            Self::ArrayType => "ArrayType",
            Self::TupleType => "TupleType",
            Self::FnType => "FnType",
            Self::TraitObject => "TraitObject",
            Self::ImplTrait => "ImplTrait",
            Self::TraitBound => "TraitBound",
            Self::NeverType => "NeverType",
            Self::InferType => "InferType",
            Self::Ident(_) => "Ident",
            Self::Lit(_) => "Lit",
            Self::Unknown => "Unknown",
        }
    }

    /// Operator symbol for binary, unary and assignment categories.
    pub fn operator(&self) -> Option<&'static str> {
        match self {
            Self::BinaryExpr(op) | Self::UnaryExpr(op) | Self::AssignExpr(op) => Some(*op),
            _ => None,
        }
    }
}

/// Encoded type tag: the category name, plus `:<op>` when the node has an operator.
impl fmt::Display for AstNodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.operator() {
            Some(op) => write!(f, "{}:{}", self.name(), op),
            None => f.write_str(self.name()),
        }
    }
}

impl AstNode {
    pub fn new(kind: AstNodeKind) -> Self {
        Self { kind, children: Vec::new() }
    }

    pub fn with_children(kind: AstNodeKind, children: Vec<AstNode>) -> Self {
        Self { kind, children }
    }

    pub fn ident(name: impl Into<String>) -> Self {
        Self::new(AstNodeKind::Ident(name.into()))
    }

    pub fn lit(text: impl Into<String>) -> Self {
        Self::new(AstNodeKind::Lit(text.into()))
    }

    /// Identifiers and literals are the terminals paths are drawn between.
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, AstNodeKind::Ident(_) | AstNodeKind::Lit(_))
    }

    /// Verbatim token text of a leaf.
    pub fn token(&self) -> Option<&str> {
        match &self.kind {
            AstNodeKind::Ident(text) | AstNodeKind::Lit(text) => Some(text),
            _ => None,
        }
    }

    pub fn tag(&self) -> String {
        self.kind.to_string()
    }

    /// Identity comparison: true only if both references point at the same node.
    pub fn is_same(&self, other: &AstNode) -> bool {
        std::ptr::eq(self, other)
    }

    /// Name of a `FunctionDecl` (its first `Ident` child).
    pub fn function_name(&self) -> Option<&str> {
        if self.kind != AstNodeKind::FunctionDecl {
            return None;
        }
        self.children.first().and_then(AstNode::token)
    }

    /// Count all nodes in the subtree (including self)
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(AstNode::node_count).sum::<usize>()
    }
}
