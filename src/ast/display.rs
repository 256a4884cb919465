//! Single-line node renderings for diagnostics.
//!
//! Every variant renders on one line: operator nodes show their symbol,
//! blocks show a statement count, and long argument/parameter/type-argument
//! lists collapse to a count summary so diagnostics stay scannable.

use std::fmt;

use super::node::{AccessModifier, AstNode, Modifier};

/// List entries rendered in full before collapsing to a count summary.
const MAX_RENDERED_ENTRIES: usize = 10;

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Render a delimited, comma-separated list, collapsing when long.
fn write_list(
    f: &mut fmt::Formatter<'_>,
    nodes: &[AstNode],
    open: &str,
    close: &str,
    what: &str,
) -> fmt::Result {
    if nodes.len() > MAX_RENDERED_ENTRIES {
        return write!(f, "{}{} {}{}", open, nodes.len(), what, close);
    }
    write!(f, "{}", open)?;
    for (index, node) in nodes.iter().enumerate() {
        if index > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", node)?;
    }
    write!(f, "{}", close)
}

/// Render `access` and `modifiers` as a leading keyword run.
fn write_modifiers(
    f: &mut fmt::Formatter<'_>,
    access: &Option<AccessModifier>,
    modifiers: &[Modifier],
) -> fmt::Result {
    if let Some(access) = access {
        write!(f, "{} ", access.keyword())?;
    }
    for modifier in modifiers {
        write!(f, "{} ", modifier.keyword())?;
    }
    Ok(())
}

impl fmt::Display for AstNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AstNode::Root {
                usings,
                statements,
                types,
            } => write!(
                f,
                "compilation unit ({} using{}, {} statement{}, {} type{})",
                usings.len(),
                plural(usings.len()),
                statements.len(),
                plural(statements.len()),
                types.len(),
                plural(types.len())
            ),

            AstNode::NumericLiteral { text, .. } => write!(f, "{}", text),
            AstNode::BooleanLiteral { value } => write!(f, "{}", value),
            AstNode::StringLiteral { text } => write!(f, "{}", text),
            AstNode::Identifier { name } => write!(f, "{}", name),
            AstNode::Parenthesized { expression } => write!(f, "({})", expression),
            AstNode::Unary {
                op,
                operand,
                is_prefix,
            } => {
                if *is_prefix {
                    write!(f, "{}{}", op.symbol(), operand)
                } else {
                    write!(f, "{}{}", operand, op.symbol())
                }
            }
            AstNode::Binary { op, left, right } => {
                write!(f, "{} {} {}", left, op.symbol(), right)
            }
            AstNode::MemberAccess { object, member } => write!(f, "{}.{}", object, member),
            AstNode::ElementAccess { object, arguments } => {
                write!(f, "{}{}", object, arguments)
            }
            AstNode::Invocation { callee, arguments } => write!(f, "{}{}", callee, arguments),
            AstNode::ObjectCreation { ty, arguments } => {
                write!(f, "new {}{}", ty, arguments)
            }
            AstNode::GenericName {
                name,
                type_arguments,
            } => write!(f, "{}{}", name, type_arguments),
            AstNode::Ternary {
                condition,
                when_true,
                when_false,
            } => write!(f, "{} ? {} : {}", condition, when_true, when_false),

            AstNode::ExpressionStatement { expression } => write!(f, "{};", expression),
            AstNode::Return { expression } => match expression {
                Some(expression) => write!(f, "return {};", expression),
                None => write!(f, "return;"),
            },
            AstNode::VariableDeclaration {
                ty,
                name,
                initializer,
            } => match initializer {
                Some(initializer) => write!(f, "{} {} = {};", ty, name, initializer),
                None => write!(f, "{} {};", ty, name),
            },
            AstNode::Empty => write!(f, ";"),
            AstNode::Block { statements } => write!(
                f,
                "{{ {} statement{} }}",
                statements.len(),
                plural(statements.len())
            ),
            AstNode::If {
                condition,
                else_branch,
                ..
            } => {
                if else_branch.is_some() {
                    write!(f, "if ({}) ... else ...", condition)
                } else {
                    write!(f, "if ({}) ...", condition)
                }
            }
            AstNode::While { condition, .. } => write!(f, "while ({}) ...", condition),
            AstNode::DoWhile { condition, .. } => write!(f, "do ... while ({})", condition),
            AstNode::For {
                initializer,
                condition,
                increment,
                ..
            } => {
                write!(f, "for (")?;
                if let Some(initializer) = initializer {
                    write!(f, "{}", initializer)?;
                } else {
                    write!(f, ";")?;
                }
                match condition {
                    Some(condition) => write!(f, " {};", condition)?,
                    None => write!(f, " ;")?,
                }
                if let Some(increment) = increment {
                    write!(f, " {}", increment)?;
                }
                write!(f, ") ...")
            }
            AstNode::Foreach {
                ty,
                name,
                iterable,
                ..
            } => write!(f, "foreach ({} {} in {}) ...", ty, name, iterable),
            AstNode::LocalFunction {
                return_type,
                name,
                parameters,
                ..
            } => write!(f, "{} {}{} ...", return_type, name, parameters),

            AstNode::TypeDecl {
                kind,
                access,
                modifiers,
                name,
                members,
            } => {
                write_modifiers(f, access, modifiers)?;
                write!(
                    f,
                    "{} {} ({} member{})",
                    kind.keyword(),
                    name,
                    members.len(),
                    plural(members.len())
                )
            }
            AstNode::FieldDecl {
                access,
                modifiers,
                ty,
                name,
                initializer,
            } => {
                write_modifiers(f, access, modifiers)?;
                match initializer {
                    Some(initializer) => write!(f, "{} {} = {};", ty, name, initializer),
                    None => write!(f, "{} {};", ty, name),
                }
            }
            AstNode::PropertyDecl {
                access,
                modifiers,
                ty,
                name,
                accessors,
            } => {
                write_modifiers(f, access, modifiers)?;
                write!(f, "{} {} {{", ty, name)?;
                for accessor in accessors {
                    write!(f, " {};", accessor.kind.keyword())?;
                }
                write!(f, " }}")
            }
            AstNode::MethodDecl {
                access,
                modifiers,
                return_type,
                name,
                parameters,
                body,
            } => {
                write_modifiers(f, access, modifiers)?;
                write!(f, "{} {}{}", return_type, name, parameters)?;
                if body.is_none() {
                    write!(f, ";")?;
                }
                Ok(())
            }
            AstNode::ConstructorDecl {
                access,
                name,
                parameters,
                ..
            } => {
                write_modifiers(f, access, &[])?;
                write!(f, "{}{}", name, parameters)
            }
            AstNode::EnumMemberDecl { name, value } => match value {
                Some(value) => write!(f, "{} = {}", name, value),
                None => write!(f, "{}", name),
            },

            AstNode::TypeRef {
                name,
                type_arguments,
            } => {
                write!(f, "{}", name)?;
                if let Some(type_arguments) = type_arguments {
                    write!(f, "{}", type_arguments)?;
                }
                Ok(())
            }
            AstNode::TypeArgumentList { arguments } => {
                write_list(f, arguments, "<", ">", "type arguments")
            }
            AstNode::QualifiedName { qualifier, name } => write!(f, "{}.{}", qualifier, name),
            AstNode::Parameter { ty, name } => write!(f, "{} {}", ty, name),
            AstNode::ParameterList { parameters } => {
                write_list(f, parameters, "(", ")", "parameters")
            }
            AstNode::Argument { expression } => write!(f, "{}", expression),
            AstNode::ArgumentList {
                arguments,
                bracketed,
            } => {
                if *bracketed {
                    write_list(f, arguments, "[", "]", "arguments")
                } else {
                    write_list(f, arguments, "(", ")", "arguments")
                }
            }
            AstNode::UsingDirective { path, alias } => match alias {
                Some(alias) => write!(f, "using {} = {};", alias, path),
                None => write!(f, "using {};", path),
            },
        }
    }
}
