//! Expression and definition AST.
//!
//! Two closed, mutually recursive sums. Nodes are built by an external
//! producer (parser or evaluator) and only read here. Both (de)serialize as
//! objects tagged by `type`, e.g. `{"type": "named", "name": "Foo"}`.

use flowtype_core::Type;
use serde::{Deserialize, Serialize};

/// Which of the two AST sums a node belongs to.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Underlying {
    Expression,
    Definition,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Expression {
    /// A concrete type, e.g. a number literal used as a match pattern.
    Literal(LiteralExpression),
    /// A reference to a named type, optionally with field arguments.
    Named(NamedExpression),
    Intersection(IntersectionExpression),
    Union(UnionExpression),
    FieldAccess(FieldAccessExpression),
    BuiltinFunction(BuiltinFunctionExpression),
    Match(MatchExpression),
    Scope(ScopeExpression),
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LiteralExpression {
    pub value: Type,
}

/// `Name { field: expr, ... }`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NamedExpression {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<NamedExpressionField>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NamedExpressionField {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Expression,
}

/// `a & b & ...`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IntersectionExpression {
    pub items: Vec<Expression>,
}

/// `a | b | ...`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UnionExpression {
    pub items: Vec<Expression>,
}

/// `of.field`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FieldAccessExpression {
    pub of: Box<Expression>,
    pub field: String,
}

/// A call to a builtin function. The function name is not a type reference.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BuiltinFunctionExpression {
    pub function: String,
    pub args: Vec<Expression>,
}

/// `match of { pattern as binding => to, ... }`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchExpression {
    pub of: Box<Expression>,
    pub arms: Vec<MatchArm>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchArm {
    pub pattern: Expression,
    #[serde(default)]
    pub binding: Option<String>,
    pub to: Expression,
}

/// `{ definitions...; expression }`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScopeExpression {
    pub definitions: Vec<Definition>,
    pub expression: Box<Expression>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Definition {
    /// `let name = value;`
    Variable(VariableDefinition),
    /// `struct Name { field: type, ... }`
    Struct(StructDefinition),
    /// `def name(param: type, ...) = value;`
    Function(FunctionDefinition),
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VariableDefinition {
    pub name: String,
    pub value: Expression,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StructDefinition {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<StructDefinitionField>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StructDefinitionField {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Expression,
}

/// A function definition.
///
/// Reference extraction only covers parameter types; the body is evaluated
/// per call and is tracked only when a dependency graph opts in.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FunctionDefinition {
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub value: Expression,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Expression,
}

impl Expression {
    pub fn literal(value: impl Into<Type>) -> Self {
        Self::Literal(LiteralExpression {
            value: value.into(),
        })
    }

    /// A bare reference: `Name`.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(NamedExpression {
            name: name.into(),
            fields: Vec::new(),
        })
    }

    /// A reference with field arguments: `Name { a: .., b: .. }`.
    pub fn named_with<N, I>(name: impl Into<String>, fields: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, Expression)>,
    {
        Self::Named(NamedExpression {
            name: name.into(),
            fields: fields
                .into_iter()
                .map(|(name, ty)| NamedExpressionField {
                    name: name.into(),
                    ty,
                })
                .collect(),
        })
    }

    pub fn intersection(items: impl IntoIterator<Item = Expression>) -> Self {
        Self::Intersection(IntersectionExpression {
            items: items.into_iter().collect(),
        })
    }

    pub fn union(items: impl IntoIterator<Item = Expression>) -> Self {
        Self::Union(UnionExpression {
            items: items.into_iter().collect(),
        })
    }

    pub fn field_access(of: Expression, field: impl Into<String>) -> Self {
        Self::FieldAccess(FieldAccessExpression {
            of: Box::new(of),
            field: field.into(),
        })
    }

    pub fn builtin_function(
        function: impl Into<String>,
        args: impl IntoIterator<Item = Expression>,
    ) -> Self {
        Self::BuiltinFunction(BuiltinFunctionExpression {
            function: function.into(),
            args: args.into_iter().collect(),
        })
    }

    pub fn match_(of: Expression, arms: impl IntoIterator<Item = MatchArm>) -> Self {
        Self::Match(MatchExpression {
            of: Box::new(of),
            arms: arms.into_iter().collect(),
        })
    }

    pub fn scope(
        definitions: impl IntoIterator<Item = Definition>,
        expression: Expression,
    ) -> Self {
        Self::Scope(ScopeExpression {
            definitions: definitions.into_iter().collect(),
            expression: Box::new(expression),
        })
    }
}

impl MatchArm {
    pub fn new(pattern: Expression, to: Expression) -> Self {
        Self {
            pattern,
            binding: None,
            to,
        }
    }

    pub fn with_binding(mut self, binding: impl Into<String>) -> Self {
        self.binding = Some(binding.into());
        self
    }
}

impl Definition {
    pub fn variable(name: impl Into<String>, value: Expression) -> Self {
        Self::Variable(VariableDefinition {
            name: name.into(),
            value,
        })
    }

    pub fn structure<N, I>(name: impl Into<String>, fields: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, Expression)>,
    {
        Self::Struct(StructDefinition {
            name: name.into(),
            fields: fields
                .into_iter()
                .map(|(name, ty)| StructDefinitionField {
                    name: name.into(),
                    ty,
                })
                .collect(),
        })
    }

    pub fn function<N, I>(name: impl Into<String>, parameters: I, value: Expression) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, Expression)>,
    {
        Self::Function(FunctionDefinition {
            name: name.into(),
            parameters: parameters
                .into_iter()
                .map(|(name, ty)| Parameter {
                    name: name.into(),
                    ty,
                })
                .collect(),
            value,
        })
    }

    /// The name this definition binds.
    pub fn name(&self) -> &str {
        match self {
            Self::Variable(d) => &d.name,
            Self::Struct(d) => &d.name,
            Self::Function(d) => &d.name,
        }
    }
}

/// A borrowed node of either sum.
#[derive(Clone, Copy, Debug)]
pub enum Node<'a> {
    Expression(&'a Expression),
    Definition(&'a Definition),
}

impl Node<'_> {
    pub fn underlying(self) -> Underlying {
        match self {
            Self::Expression(_) => Underlying::Expression,
            Self::Definition(_) => Underlying::Definition,
        }
    }
}

impl<'a> From<&'a Expression> for Node<'a> {
    fn from(expr: &'a Expression) -> Self {
        Self::Expression(expr)
    }
}

impl<'a> From<&'a Definition> for Node<'a> {
    fn from(def: &'a Definition) -> Self {
        Self::Definition(def)
    }
}
