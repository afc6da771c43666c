//! Reduces a `graphql-parser` document to the subset the storefront sends:
//! one `query` operation made of nested field selections.

use graphql_parser::query::{self as ast, Definition, OperationDefinition, Selection};

use super::error::GraphQlError;

/// Deepest `{`/`(`/`[` nesting accepted before handing the document to the
/// recursive parser.
pub const MAX_QUERY_DEPTH: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub selection: Vec<Field>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    pub name: Option<String>,
    pub selection: Vec<Field>,
}

/// Iterative scan of bracket nesting, skipping strings and comments.
fn check_depth(source: &str, max_depth: usize) -> Result<(), GraphQlError> {
    let bytes = source.as_bytes();
    let mut depth = 0usize;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'#' => {
                while i < bytes.len() && bytes[i] != b'\n' && bytes[i] != b'\r' {
                    i += 1;
                }
            }
            b'"' if bytes[i..].starts_with(b"\"\"\"") => {
                i += 3;
                while i < bytes.len() && !bytes[i..].starts_with(b"\"\"\"") {
                    i += if bytes[i] == b'\\' { 2 } else { 1 };
                }
                i += 2;
            }
            b'"' => {
                i += 1;
                while i < bytes.len() && bytes[i] != b'"' {
                    i += if bytes[i] == b'\\' { 2 } else { 1 };
                }
            }
            b'{' | b'(' | b'[' => {
                depth += 1;
                if depth > max_depth {
                    return Err(GraphQlError::Syntax(format!(
                        "query nesting exceeds the maximum depth of {}",
                        max_depth
                    )));
                }
            }
            b'}' | b')' | b']' => depth = depth.saturating_sub(1),
            _ => {}
        }
        i += 1;
    }
    Ok(())
}

/// Add `field` to `fields`, merging its sub-selection into an earlier
/// field of the same name.
fn merge_field(fields: &mut Vec<Field>, field: Field) {
    match fields.iter_mut().find(|existing| existing.name == field.name) {
        Some(existing) => {
            for sub in field.selection {
                merge_field(&mut existing.selection, sub);
            }
        }
        None => fields.push(field),
    }
}

fn convert_selection_set<'a>(
    set: &ast::SelectionSet<'a, &'a str>,
) -> Result<Vec<Field>, GraphQlError> {
    let mut fields = Vec::new();

    for item in &set.items {
        let field = match item {
            Selection::Field(field) => field,
            Selection::FragmentSpread(_) | Selection::InlineFragment(_) => {
                return Err(GraphQlError::Unsupported("Fragments"))
            }
        };
        if field.alias.is_some() {
            return Err(GraphQlError::Unsupported("Aliases"));
        }
        if !field.arguments.is_empty() {
            return Err(GraphQlError::Unsupported("Arguments and variables"));
        }
        if !field.directives.is_empty() {
            return Err(GraphQlError::Unsupported("Directives"));
        }

        merge_field(
            &mut fields,
            Field {
                name: field.name.to_string(),
                selection: convert_selection_set(&field.selection_set)?,
            },
        );
    }

    Ok(fields)
}

pub fn parse_query(source: &str) -> Result<Operation, GraphQlError> {
    check_depth(source, MAX_QUERY_DEPTH)?;

    let document = ast::parse_query::<&str>(source)
        .map_err(|e| GraphQlError::Syntax(e.to_string()))?;

    let mut operations = Vec::new();
    for definition in &document.definitions {
        match definition {
            Definition::Operation(operation) => operations.push(operation),
            Definition::Fragment(_) => return Err(GraphQlError::Unsupported("Fragments")),
        }
    }

    let operation = match operations.as_slice() {
        [operation] => *operation,
        [] => return Err(GraphQlError::Syntax("document contains no operation".into())),
        _ => return Err(GraphQlError::Unsupported("Multiple operations")),
    };

    match operation {
        OperationDefinition::SelectionSet(set) => Ok(Operation {
            name: None,
            selection: convert_selection_set(set)?,
        }),
        OperationDefinition::Query(query) => {
            if !query.variable_definitions.is_empty() {
                return Err(GraphQlError::Unsupported("Arguments and variables"));
            }
            if !query.directives.is_empty() {
                return Err(GraphQlError::Unsupported("Directives"));
            }
            Ok(Operation {
                name: query.name.map(str::to_string),
                selection: convert_selection_set(&query.selection_set)?,
            })
        }
        OperationDefinition::Mutation(_) | OperationDefinition::Subscription(_) => {
            Err(GraphQlError::Unsupported("Mutations and subscriptions"))
        }
    }
}
