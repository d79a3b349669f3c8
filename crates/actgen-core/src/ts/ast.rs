// ---------------------------------------------------------------------------
// Statements
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `import { A, B } from "module";`
    Import { names: Vec<String>, module: String },
    /// `[export] const name = init;`
    Const {
        exported: bool,
        name: String,
        init: Expr,
    },
    /// `[export] interface Name { ... }`
    Interface {
        exported: bool,
        name: String,
        members: Vec<PropertySignature>,
    },
    /// `[export] type Name = ty;`
    TypeAlias {
        exported: bool,
        name: String,
        ty: TypeNode,
    },
}

impl Statement {
    pub fn import(module: impl Into<String>, names: Vec<String>) -> Self {
        Statement::Import {
            names,
            module: module.into(),
        }
    }

    pub fn constant(exported: bool, name: impl Into<String>, init: Expr) -> Self {
        Statement::Const {
            exported,
            name: name.into(),
            init,
        }
    }
}

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct PropertySignature {
    pub name: String,
    pub optional: bool,
    pub ty: TypeNode,
}

impl PropertySignature {
    pub fn new(name: impl Into<String>, optional: bool, ty: TypeNode) -> Self {
        Self {
            name: name.into(),
            optional,
            ty,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypeNode {
    /// Type text taken verbatim from the input (`string`, `IPost[]`, `Array<T>`).
    Reference(String),
    /// `typeof name`
    Query(String),
    /// `{ a: A; b?: B; }`
    Literal(Vec<PropertySignature>),
    /// `A | B`; prints as `never` when empty.
    Union(Vec<TypeNode>),
}

impl TypeNode {
    pub fn reference(name: impl Into<String>) -> Self {
        TypeNode::Reference(name.into())
    }
}

// ---------------------------------------------------------------------------
// Expressions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Str(String),
    Ident(String),
    Object(ObjectLiteral),
    Paren(Box<Expr>),
    Arrow(ArrowFunction),
}

impl Expr {
    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Ident(name.into())
    }

    pub fn paren(inner: Expr) -> Self {
        Expr::Paren(Box::new(inner))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectLiteral {
    pub properties: Vec<ObjectProperty>,
    /// One property per line instead of `{ a, b }`.
    pub multiline: bool,
}

impl ObjectLiteral {
    pub fn inline(properties: Vec<ObjectProperty>) -> Self {
        Self {
            properties,
            multiline: false,
        }
    }

    pub fn multiline(properties: Vec<ObjectProperty>) -> Self {
        Self {
            properties,
            multiline: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ObjectProperty {
    /// `name: value`
    Assign { name: String, value: Expr },
    /// `name`
    Shorthand(String),
}

impl ObjectProperty {
    pub fn assign(name: impl Into<String>, value: Expr) -> Self {
        ObjectProperty::Assign {
            name: name.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrowFunction {
    pub params: Vec<Parameter>,
    pub return_type: Option<TypeNode>,
    pub body: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub optional: bool,
    pub ty: TypeNode,
}
