use super::ast::{
    ArrowFunction, Expr, ObjectLiteral, ObjectProperty, Parameter, PropertySignature, Statement,
    TypeNode,
};
use regex::Regex;
use std::sync::OnceLock;

const INDENT: &str = "    ";

static IDENT_RE: OnceLock<Regex> = OnceLock::new();

fn ident_re() -> &'static Regex {
    IDENT_RE.get_or_init(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap())
}

pub fn is_identifier(name: &str) -> bool {
    ident_re().is_match(name)
}

/// Print a single statement with no trailing newline.
pub fn print_statement(stmt: &Statement) -> String {
    let mut p = Printer::new();
    p.statement(stmt);
    p.finish()
}

/// Text emitter with the TypeScript printer's layout rules.
///
/// Every object literal bumps the indent level for its members, including
/// single-line ones, so a multi-line literal nested inside `{ ... }` sits one
/// level deeper than the line it starts on. `tsc` does the same.
#[derive(Debug, Default)]
pub struct Printer {
    out: String,
    indent: usize,
}

impl Printer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn push(&mut self, s: &str) {
        self.out.push_str(s);
    }

    fn newline(&mut self) {
        self.out.push('\n');
        for _ in 0..self.indent {
            self.out.push_str(INDENT);
        }
    }

    pub fn statement(&mut self, stmt: &Statement) {
        match stmt {
            Statement::Import { names, module } => {
                self.push("import { ");
                self.push(&names.join(", "));
                self.push(" } from ");
                self.string_literal(module);
                self.push(";");
            }
            Statement::Const {
                exported,
                name,
                init,
            } => {
                self.export_modifier(*exported);
                self.push("const ");
                self.push(name);
                self.push(" = ");
                self.expr(init);
                self.push(";");
            }
            Statement::Interface {
                exported,
                name,
                members,
            } => {
                self.export_modifier(*exported);
                self.push("interface ");
                self.push(name);
                self.push(" ");
                self.member_block(members);
            }
            Statement::TypeAlias { exported, name, ty } => {
                self.export_modifier(*exported);
                self.push("type ");
                self.push(name);
                self.push(" = ");
                self.type_node(ty);
                self.push(";");
            }
        }
    }

    fn export_modifier(&mut self, exported: bool) {
        if exported {
            self.push("export ");
        }
    }

    // -----------------------------------------------------------------------
    // Types
    // -----------------------------------------------------------------------

    fn type_node(&mut self, ty: &TypeNode) {
        match ty {
            TypeNode::Reference(text) => self.push(text),
            TypeNode::Query(name) => {
                self.push("typeof ");
                self.push(name);
            }
            TypeNode::Literal(members) if members.is_empty() => self.push("{}"),
            TypeNode::Literal(members) => self.member_block(members),
            TypeNode::Union(types) if types.is_empty() => self.push("never"),
            TypeNode::Union(types) => {
                for (i, t) in types.iter().enumerate() {
                    if i > 0 {
                        self.push(" | ");
                    }
                    self.type_node(t);
                }
            }
        }
    }

    fn member_block(&mut self, members: &[PropertySignature]) {
        self.push("{");
        self.indent += 1;
        for m in members {
            self.newline();
            self.property_name(&m.name);
            if m.optional {
                self.push("?");
            }
            self.push(": ");
            self.type_node(&m.ty);
            self.push(";");
        }
        self.indent -= 1;
        self.newline();
        self.push("}");
    }

    // -----------------------------------------------------------------------
    // Expressions
    // -----------------------------------------------------------------------

    fn expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Str(s) => self.string_literal(s),
            Expr::Ident(name) => self.push(name),
            Expr::Object(obj) => self.object(obj),
            Expr::Paren(inner) => {
                self.push("(");
                self.expr(inner);
                self.push(")");
            }
            Expr::Arrow(f) => self.arrow(f),
        }
    }

    fn object(&mut self, obj: &ObjectLiteral) {
        if obj.properties.is_empty() {
            self.push("{}");
            return;
        }
        self.indent += 1;
        if obj.multiline {
            self.push("{");
            for (i, prop) in obj.properties.iter().enumerate() {
                if i > 0 {
                    self.push(",");
                }
                self.newline();
                self.object_property(prop);
            }
            self.indent -= 1;
            self.newline();
            self.push("}");
        } else {
            self.push("{ ");
            for (i, prop) in obj.properties.iter().enumerate() {
                if i > 0 {
                    self.push(", ");
                }
                self.object_property(prop);
            }
            self.push(" }");
            self.indent -= 1;
        }
    }

    fn object_property(&mut self, prop: &ObjectProperty) {
        match prop {
            ObjectProperty::Assign { name, value } => {
                self.property_name(name);
                self.push(": ");
                self.expr(value);
            }
            ObjectProperty::Shorthand(name) => self.push(name),
        }
    }

    fn arrow(&mut self, f: &ArrowFunction) {
        self.push("(");
        for (i, param) in f.params.iter().enumerate() {
            if i > 0 {
                self.push(", ");
            }
            self.parameter(param);
        }
        self.push(")");
        if let Some(ret) = &f.return_type {
            self.push(": ");
            self.type_node(ret);
        }
        self.push(" => ");
        self.expr(&f.body);
    }

    fn parameter(&mut self, param: &Parameter) {
        self.push(&param.name);
        if param.optional {
            self.push("?");
        }
        self.push(": ");
        self.type_node(&param.ty);
    }

    fn property_name(&mut self, name: &str) {
        if is_identifier(name) {
            self.push(name);
        } else {
            self.string_literal(name);
        }
    }

    fn string_literal(&mut self, value: &str) {
        let quoted = quote(value);
        self.push(&quoted);
    }
}

/// Double-quoted string literal. Non-ASCII text is written as `\uXXXX` escapes.
pub fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0b}' => out.push_str("\\v"),
            '\u{0c}' => out.push_str("\\f"),
            c if c.is_ascii() && !c.is_ascii_control() => out.push(c),
            c => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    out.push_str(&format!("\\u{unit:04X}"));
                }
            }
        }
    }
    out.push('"');
    out
}
