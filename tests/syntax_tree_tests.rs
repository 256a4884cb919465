// Integration tests for the syntax-tree model: uniform child enumeration
// and diagnostic rendering, exercised on hand-built trees the way a parser
// would construct them.

use pretty_assertions::assert_eq;

use sharplex::ast::node::{
    AccessModifier, Accessor, AccessorBody, AccessorKind, AstNode, BinaryOp, Modifier,
    TypeDeclKind, UnaryOp,
};
use sharplex::lexer::token::LiteralValue;

fn ident(name: &str) -> AstNode {
    AstNode::Identifier {
        name: name.to_string(),
    }
}

fn type_ref(name: &str) -> AstNode {
    AstNode::TypeRef {
        name: Box::new(ident(name)),
        type_arguments: None,
    }
}

fn number(text: &str, value: i32) -> AstNode {
    AstNode::NumericLiteral {
        text: text.to_string(),
        value: LiteralValue::Int(value),
    }
}

/// A small but representative compilation unit:
///
/// ```text
/// using System;
/// int answer = 42;
/// public class Counter
/// {
///     private int count = 0;
///     public int Count { get; init; }
///     public void Add(int amount) { ... }
/// }
/// ```
fn sample_unit() -> AstNode {
    let field = AstNode::FieldDecl {
        access: Some(AccessModifier::Private),
        modifiers: vec![],
        ty: Box::new(type_ref("int")),
        name: "count".to_string(),
        initializer: Some(Box::new(number("0", 0))),
    };
    let property = AstNode::PropertyDecl {
        access: Some(AccessModifier::Public),
        modifiers: vec![],
        ty: Box::new(type_ref("int")),
        name: "Count".to_string(),
        accessors: vec![
            Accessor::new(AccessorKind::Get, AccessorBody::Auto),
            Accessor::new(AccessorKind::Init, AccessorBody::Auto),
        ],
    };
    let method = AstNode::MethodDecl {
        access: Some(AccessModifier::Public),
        modifiers: vec![],
        return_type: Box::new(type_ref("void")),
        name: "Add".to_string(),
        parameters: Box::new(AstNode::ParameterList {
            parameters: vec![AstNode::Parameter {
                ty: Box::new(type_ref("int")),
                name: "amount".to_string(),
            }],
        }),
        body: Some(Box::new(AstNode::Block {
            statements: vec![AstNode::ExpressionStatement {
                expression: Box::new(AstNode::Binary {
                    op: BinaryOp::AddAssign,
                    left: Box::new(ident("count")),
                    right: Box::new(ident("amount")),
                }),
            }],
        })),
    };

    AstNode::Root {
        usings: vec![AstNode::UsingDirective {
            path: Box::new(ident("System")),
            alias: None,
        }],
        statements: vec![AstNode::VariableDeclaration {
            ty: Box::new(type_ref("int")),
            name: "answer".to_string(),
            initializer: Some(Box::new(number("42", 42))),
        }],
        types: vec![AstNode::TypeDecl {
            kind: TypeDeclKind::Class,
            access: Some(AccessModifier::Public),
            modifiers: vec![],
            name: "Counter".to_string(),
            members: vec![field, property, method],
        }],
    }
}

#[test]
fn test_every_child_list_entry_is_present() {
    fn walk(node: &AstNode, count: &mut usize) {
        *count += 1;
        for child in node.children() {
            walk(child, count);
        }
    }
    let mut count = 0;
    walk(&sample_unit(), &mut count);
    // The whole tree is reachable through children() alone.
    assert!(count > 15, "walked only {} nodes", count);
}

#[test]
fn test_root_orders_usings_statements_types() {
    let root = sample_unit();
    let children = root.children();
    assert_eq!(children.len(), 3);
    assert!(matches!(children[0], AstNode::UsingDirective { .. }));
    assert!(matches!(children[1], AstNode::VariableDeclaration { .. }));
    assert!(matches!(children[2], AstNode::TypeDecl { .. }));
}

#[test]
fn test_optional_children_are_omitted_not_null() {
    let without_init = AstNode::VariableDeclaration {
        ty: Box::new(type_ref("int")),
        name: "x".to_string(),
        initializer: None,
    };
    let with_init = AstNode::VariableDeclaration {
        ty: Box::new(type_ref("int")),
        name: "x".to_string(),
        initializer: Some(Box::new(number("1", 1))),
    };
    assert_eq!(without_init.children().len(), 1);
    assert_eq!(with_init.children().len(), 2);

    let abstract_method = AstNode::MethodDecl {
        access: Some(AccessModifier::Public),
        modifiers: vec![Modifier::Abstract],
        return_type: Box::new(type_ref("void")),
        name: "Run".to_string(),
        parameters: Box::new(AstNode::ParameterList { parameters: vec![] }),
        body: None,
    };
    assert_eq!(abstract_method.children().len(), 2);
}

#[test]
fn test_auto_accessors_contribute_no_children() {
    let root = sample_unit();
    let AstNode::Root { types, .. } = &root else {
        panic!("expected root");
    };
    let AstNode::TypeDecl { members, .. } = &types[0] else {
        panic!("expected type declaration");
    };
    let property = &members[1];
    // Only the property's type reference: both accessors are auto.
    assert_eq!(property.children().len(), 1);
}

#[test]
fn test_expression_rendering_uses_operator_symbols() {
    let expr = AstNode::Ternary {
        condition: Box::new(AstNode::Binary {
            op: BinaryOp::Ge,
            left: Box::new(ident("n")),
            right: Box::new(number("0", 0)),
        }),
        when_true: Box::new(ident("n")),
        when_false: Box::new(AstNode::Unary {
            op: UnaryOp::Neg,
            operand: Box::new(ident("n")),
            is_prefix: true,
        }),
    };
    assert_eq!(expr.to_string(), "n >= 0 ? n : -n");
}

#[test]
fn test_declaration_rendering() {
    let root = sample_unit();
    assert_eq!(
        root.to_string(),
        "compilation unit (1 using, 1 statement, 1 type)"
    );

    let AstNode::Root { types, .. } = &root else {
        panic!("expected root");
    };
    assert_eq!(types[0].to_string(), "public class Counter (3 members)");
}

#[test]
fn test_generic_type_reference_rendering() {
    let dictionary = AstNode::TypeRef {
        name: Box::new(ident("Dictionary")),
        type_arguments: Some(Box::new(AstNode::TypeArgumentList {
            arguments: vec![type_ref("string"), type_ref("int")],
        })),
    };
    assert_eq!(dictionary.to_string(), "Dictionary<string, int>");
    // The type-argument list is a structural child; the base name is too.
    assert_eq!(dictionary.children().len(), 2);
}

#[test]
fn test_foreach_and_element_access() {
    let body = AstNode::Block {
        statements: vec![AstNode::ExpressionStatement {
            expression: Box::new(AstNode::ElementAccess {
                object: Box::new(ident("totals")),
                arguments: Box::new(AstNode::ArgumentList {
                    arguments: vec![AstNode::Argument {
                        expression: Box::new(ident("key")),
                    }],
                    bracketed: true,
                }),
            }),
        }],
    };
    let foreach = AstNode::Foreach {
        ty: Box::new(type_ref("string")),
        name: "key".to_string(),
        iterable: Box::new(ident("keys")),
        body: Box::new(body),
    };
    assert_eq!(foreach.to_string(), "foreach (string key in keys) ...");
    assert_eq!(foreach.children().len(), 3);
}
