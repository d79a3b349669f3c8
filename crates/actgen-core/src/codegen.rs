//! Action-object generators.
//!
//! Each action produces a type tag constant, a payload interface and a
//! factory function; each group adds a union of its action interfaces and
//! an exported collection of its factories.

use crate::naming::{
    action_def_name, action_fn_name, action_name, action_tag, file_name, group_dto_name,
    group_set_name, parse_optional,
};
use crate::schema::{Action, ActionGroup, DataRoot, ImportMap};
use crate::ts::{
    print_statement, ArrowFunction, Expr, ObjectLiteral, ObjectProperty, Parameter,
    PropertySignature, Statement, TypeNode,
};
use indexmap::{IndexMap, IndexSet};
use serde::Serialize;
use std::path::PathBuf;

type Actions = IndexMap<String, Option<Action>>;

/// A rendered output file, relative to the output directory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub group: String,
    #[serde(skip)]
    pub content: String,
}

// ---------------------------------------------------------------------------
// Imports
// ---------------------------------------------------------------------------

/// Named imports for every payload type with a known source, grouped by module.
///
/// Types are looked up with one trailing `[]` removed. Modules and names keep
/// the order in which payloads first reference them.
pub fn gen_imports(group: &ActionGroup, top_imports: Option<&ImportMap>) -> Vec<Statement> {
    let imports = group.merged_imports(top_imports);
    let mut by_module: IndexMap<&str, IndexSet<&str>> = IndexMap::new();

    let payload_types = group
        .actions
        .values()
        .flat_map(|action| Action::payload_entries(action.as_ref()))
        .map(|(_, ty)| ty.strip_suffix("[]").unwrap_or(ty));

    for ty in payload_types {
        if let Some((name, module)) = imports.get_key_value(ty) {
            by_module
                .entry(module.as_str())
                .or_default()
                .insert(name.as_str());
        }
    }

    by_module
        .into_iter()
        .map(|(module, names)| {
            Statement::import(module, names.into_iter().map(str::to_string).collect())
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Per-action declarations
// ---------------------------------------------------------------------------

fn gen_action_id(action_key: &str, namespace: &str) -> Statement {
    Statement::constant(
        true,
        action_name(action_key),
        Expr::Str(action_tag(action_key, namespace)),
    )
}

fn gen_action_def(action_key: &str, payload: &[(&str, &str)]) -> Statement {
    let mut members = vec![PropertySignature::new(
        "type",
        false,
        TypeNode::Query(action_name(action_key)),
    )];
    if !payload.is_empty() {
        let fields = payload
            .iter()
            .map(|(name, ty)| {
                let (bare, optional) = parse_optional(name);
                PropertySignature::new(bare, optional, TypeNode::reference(*ty))
            })
            .collect();
        members.push(PropertySignature::new(
            "payload",
            false,
            TypeNode::Literal(fields),
        ));
    }

    Statement::Interface {
        exported: true,
        name: action_def_name(action_key),
        members,
    }
}

fn gen_action_fn(action_key: &str, payload: &[(&str, &str)]) -> Statement {
    let mut params: Vec<Parameter> = payload
        .iter()
        .map(|(name, ty)| {
            let (bare, optional) = parse_optional(name);
            Parameter {
                name: bare.to_string(),
                optional,
                ty: TypeNode::reference(*ty),
            }
        })
        .collect();
    // Optional parameters must trail required ones; sort_by_key is stable.
    params.sort_by_key(|p| p.optional);

    let mut properties = vec![ObjectProperty::assign(
        "type",
        Expr::ident(action_name(action_key)),
    )];
    if !payload.is_empty() {
        let shorthand = payload
            .iter()
            .map(|(name, _)| ObjectProperty::Shorthand(parse_optional(name).0.to_string()))
            .collect();
        properties.push(ObjectProperty::assign(
            "payload",
            Expr::Object(ObjectLiteral::multiline(shorthand)),
        ));
    }

    let factory = ArrowFunction {
        params,
        return_type: Some(TypeNode::reference(action_def_name(action_key))),
        body: Box::new(Expr::paren(Expr::Object(ObjectLiteral::inline(properties)))),
    };

    Statement::constant(false, action_fn_name(action_key), Expr::Arrow(factory))
}

/// Tag constant, payload interface and factory for one action.
pub fn gen_action(group_key: &str, action_key: &str, action: Option<&Action>) -> [Statement; 3] {
    let payload = Action::payload_entries(action);
    [
        gen_action_id(action_key, group_key),
        gen_action_def(action_key, &payload),
        gen_action_fn(action_key, &payload),
    ]
}

pub fn gen_actions(group_key: &str, actions: &Actions) -> Vec<[Statement; 3]> {
    actions
        .iter()
        .map(|(key, action)| gen_action(group_key, key, action.as_ref()))
        .collect()
}

// ---------------------------------------------------------------------------
// Group-level declarations
// ---------------------------------------------------------------------------

/// `export type PostActionsDto = ISendPostAction | ISentPostAction;`
pub fn gen_group_dto(group_key: &str, actions: &Actions) -> Statement {
    Statement::TypeAlias {
        exported: true,
        name: group_dto_name(group_key),
        ty: TypeNode::Union(
            actions
                .keys()
                .map(|key| TypeNode::reference(action_def_name(key)))
                .collect(),
        ),
    }
}

/// Exported collection of factories, keyed by alias (or action key).
pub fn gen_group_set(group_key: &str, actions: &Actions) -> Statement {
    let properties = actions
        .iter()
        .map(|(key, action)| {
            let name = action
                .as_ref()
                .and_then(|a| a.alias.as_deref())
                .unwrap_or(key);
            ObjectProperty::assign(name, Expr::ident(action_fn_name(key)))
        })
        .collect();

    Statement::constant(
        true,
        group_set_name(group_key),
        Expr::Object(ObjectLiteral::multiline(properties)),
    )
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Render one group as the text of its `<group>.actions.ts` file.
pub fn render_group(
    group_key: &str,
    group: &ActionGroup,
    top_imports: Option<&ImportMap>,
) -> GeneratedFile {
    let imports = gen_imports(group, top_imports)
        .iter()
        .map(print_statement)
        .collect::<Vec<_>>()
        .join("\n");
    let actions = gen_actions(group_key, &group.actions)
        .iter()
        .flatten()
        .map(print_statement)
        .collect::<Vec<_>>()
        .join("\n\n");
    let dto = print_statement(&gen_group_dto(group_key, &group.actions));
    let set = print_statement(&gen_group_set(group_key, &group.actions));

    let sections: Vec<String> = [imports, actions, dto, set]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect();
    let mut content = sections.join("\n\n");
    content.push('\n');

    GeneratedFile {
        path: PathBuf::from(file_name(group_key)),
        group: group_key.to_string(),
        content,
    }
}

/// One file per action group, in document order.
pub fn render_root(root: &DataRoot) -> Vec<GeneratedFile> {
    root.action_groups
        .iter()
        .map(|(key, group)| render_group(key, group, root.imports.as_ref()))
        .collect()
}
