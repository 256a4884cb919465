//! Syntax-node definitions.
//!
//! One [`AstNode`] enum covers the whole vocabulary: the compilation-unit
//! root, expressions, statements, declarations, and the support shapes
//! (type references, name forms, parameter/argument lists, using
//! directives). Operators are data (a tag enum on a shared variant) rather
//! than one variant per operator, so visitors stay exhaustive matches over
//! a closed set.
//!
//! Purely lexical attributes (names stored as strings, modifier sets,
//! operator tags, prefix/postfix and bracketed flags) are not children;
//! [`AstNode::children`] exposes only structural child nodes, in order,
//! with absent optional children omitted.

use super::children::ChildList;
use crate::lexer::token::LiteralValue;

/// Binary operators, including assignment and compound-assignment forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    // Comparison
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    // Logical
    And,
    Or,
    // Assignment
    Assign,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    ModAssign,
    BitAndAssign,
    BitOrAssign,
}

impl BinaryOp {
    /// The operator's source symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Le => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::Ge => ">=",
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
            BinaryOp::Assign => "=",
            BinaryOp::AddAssign => "+=",
            BinaryOp::SubAssign => "-=",
            BinaryOp::MulAssign => "*=",
            BinaryOp::DivAssign => "/=",
            BinaryOp::ModAssign => "%=",
            BinaryOp::BitAndAssign => "&=",
            BinaryOp::BitOrAssign => "|=",
        }
    }
}

/// Unary operators; prefix/postfix position lives on the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Neg, // -x
    Not, // !x
    Inc, // ++x, x++
    Dec, // --x, x--
}

impl UnaryOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
            UnaryOp::Not => "!",
            UnaryOp::Inc => "++",
            UnaryOp::Dec => "--",
        }
    }
}

/// Which flavour of type declaration a [`AstNode::TypeDecl`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeDeclKind {
    Class,
    Struct,
    Interface,
    Enum,
    Record,
}

impl TypeDeclKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            TypeDeclKind::Class => "class",
            TypeDeclKind::Struct => "struct",
            TypeDeclKind::Interface => "interface",
            TypeDeclKind::Enum => "enum",
            TypeDeclKind::Record => "record",
        }
    }
}

/// Declared accessibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessModifier {
    Public,
    Private,
    Protected,
    Internal,
}

impl AccessModifier {
    pub fn keyword(&self) -> &'static str {
        match self {
            AccessModifier::Public => "public",
            AccessModifier::Private => "private",
            AccessModifier::Protected => "protected",
            AccessModifier::Internal => "internal",
        }
    }
}

/// Non-access modifiers a declaration may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    Static,
    Abstract,
    Sealed,
    Readonly,
    Const,
    Virtual,
    Override,
    Partial,
    Async,
}

impl Modifier {
    pub fn keyword(&self) -> &'static str {
        match self {
            Modifier::Static => "static",
            Modifier::Abstract => "abstract",
            Modifier::Sealed => "sealed",
            Modifier::Readonly => "readonly",
            Modifier::Const => "const",
            Modifier::Virtual => "virtual",
            Modifier::Override => "override",
            Modifier::Partial => "partial",
            Modifier::Async => "async",
        }
    }
}

/// Which accessor a property declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessorKind {
    Get,
    Set,
    /// A setter usable only during object initialisation.
    Init,
}

impl AccessorKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            AccessorKind::Get => "get",
            AccessorKind::Set => "set",
            AccessorKind::Init => "init",
        }
    }
}

/// How an accessor is implemented.
#[derive(Debug, Clone)]
pub enum AccessorBody {
    /// `get;` with no body of its own.
    Auto,
    /// `get { ... }`
    Block(Box<AstNode>),
    /// `get => expr;`
    Expression(Box<AstNode>),
}

/// A single property accessor.
#[derive(Debug, Clone)]
pub struct Accessor {
    pub kind: AccessorKind,
    pub body: AccessorBody,
}

impl Accessor {
    pub fn new(kind: AccessorKind, body: AccessorBody) -> Self {
        Self { kind, body }
    }

    /// The accessor's body node, when it has one.
    pub fn body_node(&self) -> Option<&AstNode> {
        match &self.body {
            AccessorBody::Auto => None,
            AccessorBody::Block(node) | AccessorBody::Expression(node) => Some(node),
        }
    }
}

/// Every syntax-node shape the parser can construct.
#[derive(Debug, Clone)]
pub enum AstNode {
    // ===== Top level =====
    /// A whole source file: using directives, global statements, and type
    /// declarations.
    Root {
        usings: Vec<AstNode>,
        statements: Vec<AstNode>,
        types: Vec<AstNode>,
    },

    // ===== Expressions =====
    /// A numeric literal with its source text and parsed value.
    NumericLiteral { text: String, value: LiteralValue },
    BooleanLiteral { value: bool },
    /// A string literal; `text` keeps the source form, quotes included.
    StringLiteral { text: String },
    Identifier { name: String },
    Parenthesized { expression: Box<AstNode> },
    Unary {
        op: UnaryOp,
        operand: Box<AstNode>,
        is_prefix: bool,
    },
    Binary {
        op: BinaryOp,
        left: Box<AstNode>,
        right: Box<AstNode>,
    },
    /// `object.member`, where the member is an identifier or generic name.
    MemberAccess {
        object: Box<AstNode>,
        member: Box<AstNode>,
    },
    /// `object[arguments]` with a bracketed argument list.
    ElementAccess {
        object: Box<AstNode>,
        arguments: Box<AstNode>,
    },
    /// `callee(arguments)`.
    Invocation {
        callee: Box<AstNode>,
        arguments: Box<AstNode>,
    },
    /// `new Type(arguments)`.
    ObjectCreation {
        ty: Box<AstNode>,
        arguments: Box<AstNode>,
    },
    /// `Name<T1, T2>`.
    GenericName {
        name: String,
        type_arguments: Box<AstNode>,
    },
    Ternary {
        condition: Box<AstNode>,
        when_true: Box<AstNode>,
        when_false: Box<AstNode>,
    },

    // ===== Statements =====
    ExpressionStatement { expression: Box<AstNode> },
    Return { expression: Option<Box<AstNode>> },
    /// `Type name = initializer;` where the initializer may be absent.
    VariableDeclaration {
        ty: Box<AstNode>,
        name: String,
        initializer: Option<Box<AstNode>>,
    },
    Empty,
    Block { statements: Vec<AstNode> },
    If {
        condition: Box<AstNode>,
        then_branch: Box<AstNode>,
        else_branch: Option<Box<AstNode>>,
    },
    While {
        condition: Box<AstNode>,
        body: Box<AstNode>,
    },
    DoWhile {
        body: Box<AstNode>,
        condition: Box<AstNode>,
    },
    For {
        initializer: Option<Box<AstNode>>,
        condition: Option<Box<AstNode>>,
        increment: Option<Box<AstNode>>,
        body: Box<AstNode>,
    },
    Foreach {
        ty: Box<AstNode>,
        name: String,
        iterable: Box<AstNode>,
        body: Box<AstNode>,
    },
    LocalFunction {
        return_type: Box<AstNode>,
        name: String,
        parameters: Box<AstNode>,
        body: Box<AstNode>,
    },

    // ===== Declarations =====
    /// A class, struct, interface, enum, or record declaration.
    TypeDecl {
        kind: TypeDeclKind,
        access: Option<AccessModifier>,
        modifiers: Vec<Modifier>,
        name: String,
        members: Vec<AstNode>,
    },
    FieldDecl {
        access: Option<AccessModifier>,
        modifiers: Vec<Modifier>,
        ty: Box<AstNode>,
        name: String,
        initializer: Option<Box<AstNode>>,
    },
    PropertyDecl {
        access: Option<AccessModifier>,
        modifiers: Vec<Modifier>,
        ty: Box<AstNode>,
        name: String,
        accessors: Vec<Accessor>,
    },
    /// A method; `body` is absent for abstract and interface members.
    MethodDecl {
        access: Option<AccessModifier>,
        modifiers: Vec<Modifier>,
        return_type: Box<AstNode>,
        name: String,
        parameters: Box<AstNode>,
        body: Option<Box<AstNode>>,
    },
    ConstructorDecl {
        access: Option<AccessModifier>,
        name: String,
        parameters: Box<AstNode>,
        body: Box<AstNode>,
    },
    /// One member of an enum, with an optional explicit value.
    EnumMemberDecl {
        name: String,
        value: Option<Box<AstNode>>,
    },

    // ===== Support =====
    /// A type reference: a simple or qualified name plus optional type
    /// arguments.
    TypeRef {
        name: Box<AstNode>,
        type_arguments: Option<Box<AstNode>>,
    },
    TypeArgumentList { arguments: Vec<AstNode> },
    /// `qualifier.name`.
    QualifiedName {
        qualifier: Box<AstNode>,
        name: Box<AstNode>,
    },
    Parameter { ty: Box<AstNode>, name: String },
    ParameterList { parameters: Vec<AstNode> },
    Argument { expression: Box<AstNode> },
    /// `(a, b)` when plain, `[a, b]` when bracketed (element access).
    ArgumentList {
        arguments: Vec<AstNode>,
        bracketed: bool,
    },
    /// `using Some.Namespace;`, optionally aliased.
    UsingDirective {
        path: Box<AstNode>,
        alias: Option<String>,
    },
}

impl AstNode {
    /// The node's structural children, in order, with absent optional
    /// children omitted. Lexical attributes (names, modifiers, operator
    /// tags) are not children.
    pub fn children(&self) -> Vec<&AstNode> {
        match self {
            AstNode::Root {
                usings,
                statements,
                types,
            } => ChildList::new()
                .each(usings)
                .each(statements)
                .each(types)
                .build(),

            AstNode::NumericLiteral { .. }
            | AstNode::BooleanLiteral { .. }
            | AstNode::StringLiteral { .. }
            | AstNode::Identifier { .. }
            | AstNode::Empty
            | AstNode::EnumMemberDecl { value: None, .. } => Vec::new(),

            AstNode::Parenthesized { expression } => {
                ChildList::new().child(expression).build()
            }
            AstNode::Unary { operand, .. } => ChildList::new().child(operand).build(),
            AstNode::Binary { left, right, .. } => {
                ChildList::new().child(left).child(right).build()
            }
            AstNode::MemberAccess { object, member } => {
                ChildList::new().child(object).child(member).build()
            }
            AstNode::ElementAccess { object, arguments } => {
                ChildList::new().child(object).child(arguments).build()
            }
            AstNode::Invocation { callee, arguments } => {
                ChildList::new().child(callee).child(arguments).build()
            }
            AstNode::ObjectCreation { ty, arguments } => {
                ChildList::new().child(ty).child(arguments).build()
            }
            AstNode::GenericName { type_arguments, .. } => {
                ChildList::new().child(type_arguments).build()
            }
            AstNode::Ternary {
                condition,
                when_true,
                when_false,
            } => ChildList::new()
                .child(condition)
                .child(when_true)
                .child(when_false)
                .build(),

            AstNode::ExpressionStatement { expression } => {
                ChildList::new().child(expression).build()
            }
            AstNode::Return { expression } => {
                ChildList::new().optional(expression.as_deref()).build()
            }
            AstNode::VariableDeclaration {
                ty, initializer, ..
            } => ChildList::new()
                .child(ty)
                .optional(initializer.as_deref())
                .build(),
            AstNode::Block { statements } => ChildList::new().each(statements).build(),
            AstNode::If {
                condition,
                then_branch,
                else_branch,
            } => ChildList::new()
                .child(condition)
                .child(then_branch)
                .optional(else_branch.as_deref())
                .build(),
            AstNode::While { condition, body } => {
                ChildList::new().child(condition).child(body).build()
            }
            AstNode::DoWhile { body, condition } => {
                ChildList::new().child(body).child(condition).build()
            }
            AstNode::For {
                initializer,
                condition,
                increment,
                body,
            } => ChildList::new()
                .optional(initializer.as_deref())
                .optional(condition.as_deref())
                .optional(increment.as_deref())
                .child(body)
                .build(),
            AstNode::Foreach {
                ty, iterable, body, ..
            } => ChildList::new()
                .child(ty)
                .child(iterable)
                .child(body)
                .build(),
            AstNode::LocalFunction {
                return_type,
                parameters,
                body,
                ..
            } => ChildList::new()
                .child(return_type)
                .child(parameters)
                .child(body)
                .build(),

            AstNode::TypeDecl { members, .. } => ChildList::new().each(members).build(),
            AstNode::FieldDecl {
                ty, initializer, ..
            } => ChildList::new()
                .child(ty)
                .optional(initializer.as_deref())
                .build(),
            AstNode::PropertyDecl { ty, accessors, .. } => {
                let mut list = ChildList::new().child(ty);
                for accessor in accessors {
                    list = list.optional(accessor.body_node());
                }
                list.build()
            }
            AstNode::MethodDecl {
                return_type,
                parameters,
                body,
                ..
            } => ChildList::new()
                .child(return_type)
                .child(parameters)
                .optional(body.as_deref())
                .build(),
            AstNode::ConstructorDecl {
                parameters, body, ..
            } => ChildList::new().child(parameters).child(body).build(),
            AstNode::EnumMemberDecl {
                value: Some(value), ..
            } => ChildList::new().child(value).build(),

            AstNode::TypeRef {
                name,
                type_arguments,
            } => ChildList::new()
                .child(name)
                .optional(type_arguments.as_deref())
                .build(),
            AstNode::TypeArgumentList { arguments } => {
                ChildList::new().each(arguments).build()
            }
            AstNode::QualifiedName { qualifier, name } => {
                ChildList::new().child(qualifier).child(name).build()
            }
            AstNode::Parameter { ty, .. } => ChildList::new().child(ty).build(),
            AstNode::ParameterList { parameters } => {
                ChildList::new().each(parameters).build()
            }
            AstNode::Argument { expression } => ChildList::new().child(expression).build(),
            AstNode::ArgumentList { arguments, .. } => {
                ChildList::new().each(arguments).build()
            }
            AstNode::UsingDirective { path, .. } => ChildList::new().child(path).build(),
        }
    }
}
