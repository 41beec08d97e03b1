//! Recursive schema walking and value binding.
//!
//! The renderer walks a resource schema in one of two modes: schema-only,
//! which scaffolds placeholders with REQUIRED/OPTIONAL type annotations, and
//! value-bound, which fills in literals from a captured value tree. Nested
//! positions dispatch through [`crate::expand`] for cardinality and through
//! [`crate::mask`] for sensitivity; a masked boundary collapses the whole
//! subtree to one placeholder.
//!
//! Generation is a pure function of its inputs: identical schema, value and
//! options always produce byte-identical text.

use crate::emit::Emitter;
use crate::error::Result;
use crate::expand::{expand, Instance};
use crate::mask::{masked, SENSITIVE};
use crate::schema::{AttributeSchema, BlockSchema, Nesting, ObjectSchema};
use hclkit::literal::{quote_string, to_literal};
use hclkit::Value;
use std::collections::BTreeMap;

/// Options controlling what the renderer includes.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Render optional attributes in addition to required ones
    pub include_optional: bool,
}

/// Rendering mode, fixed per subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Placeholders plus type annotations
    SchemaOnly,
    /// Literals from the bound value, no annotations
    Bound,
}

/// Scaffold configuration text for one resource.
///
/// With a captured `value` the literals come from the value tree (falling
/// back to placeholders for attributes the capture lacks); without one the
/// whole scaffold is placeholders with type annotations. The output is
/// structurally valid but not canonically formatted; run it through
/// [`hclkit::format`] before presenting it.
pub fn render_resource(
    resource_type: &str,
    resource_name: &str,
    provider: Option<&str>,
    schema: &BlockSchema,
    value: Option<&Value>,
    options: RenderOptions,
) -> Result<String> {
    let mut renderer = Renderer {
        options,
        em: Emitter::new(),
    };

    renderer.em.open(&format!(
        "resource {} {} {{",
        quote_string(resource_type),
        quote_string(resource_name)
    ));
    if let Some(provider) = provider {
        renderer.em.push(&format!("provider = {provider}"));
    }

    match value {
        Some(value) => {
            renderer.attributes(&schema.attributes, Some(value), Mode::Bound)?;
            renderer.blocks(&schema.blocks, value)?;
        }
        None => {
            renderer.attributes(&schema.attributes, None, Mode::SchemaOnly)?;
            renderer.blocks_schema_only(&schema.blocks)?;
        }
    }

    renderer.em.close("}");
    Ok(renderer.em.finish())
}

struct Renderer {
    options: RenderOptions,
    em: Emitter,
}

impl Renderer {
    /// Walk one level of attributes in ascending name order.
    fn attributes(
        &mut self,
        attrs: &BTreeMap<String, AttributeSchema>,
        parent: Option<&Value>,
        mode: Mode,
    ) -> Result<()> {
        for (name, attr) in attrs {
            if !attr.included(self.options.include_optional) {
                continue;
            }

            let bound = parent.and_then(|v| v.attr(name));

            if let Some(nested) = &attr.nested {
                self.nested_attribute(name, attr, nested, bound, mode)?;
                continue;
            }

            if masked(attr.sensitive, bound) {
                self.em.attribute(name, SENSITIVE, None);
                continue;
            }

            let literal = match bound {
                Some(v) => to_literal(v)?,
                None => to_literal(&attr.placeholder())?,
            };
            self.em
                .attribute(name, &literal, annotation(attr, mode).as_deref());
        }
        Ok(())
    }

    /// Render an object-typed attribute, dispatching on its nesting mode.
    fn nested_attribute(
        &mut self,
        name: &str,
        attr: &AttributeSchema,
        nested: &ObjectSchema,
        value: Option<&Value>,
        mode: Mode,
    ) -> Result<()> {
        if masked(attr.sensitive, value) {
            self.em.attribute(name, SENSITIVE, None);
            return Ok(());
        }

        // An absent sub-value drops the subtree back to schema-only
        // semantics, placeholders and annotations included.
        let mode = if value.is_none() { Mode::SchemaOnly } else { mode };
        let note = annotation(attr, mode);

        match nested.nesting {
            Nesting::Single | Nesting::Group => match value {
                Some(v) => {
                    self.em.open(&format!("{name} = {{"));
                    self.attributes(&nested.attributes, Some(v), mode)?;
                    self.em.close("}");
                }
                None => {
                    self.em.open(&annotated(format!("{name} = {{"), note));
                    self.attributes(&nested.attributes, None, mode)?;
                    self.em.close("}");
                }
            },
            Nesting::List | Nesting::Set => match value {
                Some(v) => {
                    let instances = expand(nested.nesting, Some(v));
                    if instances.is_empty() {
                        self.em.attribute(name, "[]", None);
                        return Ok(());
                    }
                    self.em.open(&format!("{name} = ["));
                    for instance in instances {
                        if let Instance::Anonymous(Some(element)) = instance {
                            if element.is_sensitive() {
                                self.em.push(&format!("{SENSITIVE},"));
                            } else {
                                self.em.open("{");
                                self.attributes(&nested.attributes, Some(element), mode)?;
                                self.em.close("},");
                            }
                        }
                    }
                    self.em.close("]");
                }
                None => {
                    // One representative element scaffolds the shape
                    self.em.open(&annotated(format!("{name} = [{{"), note));
                    self.attributes(&nested.attributes, None, mode)?;
                    self.em.close("}]");
                }
            },
            Nesting::Map => match value {
                Some(v) => {
                    let instances = expand(Nesting::Map, Some(v));
                    if instances.is_empty() {
                        self.em.attribute(name, "{}", None);
                        return Ok(());
                    }
                    self.em.open(&format!("{name} = {{"));
                    for instance in instances {
                        if let Instance::Keyed(key, element) = instance {
                            if element.is_sensitive() {
                                self.em.push(&hclkit::literal::map_entry(key, SENSITIVE));
                            } else {
                                self.em.open(&format!("{} = {{", quote_string(key)));
                                self.attributes(&nested.attributes, Some(element), mode)?;
                                self.em.close("}");
                            }
                        }
                    }
                    self.em.close("}");
                }
                None => {
                    self.em.open(&annotated(format!("{name} = {{"), note));
                    self.em.open("key = {");
                    self.attributes(&nested.attributes, None, mode)?;
                    self.em.close("}");
                    self.em.close("}");
                }
            },
        }
        Ok(())
    }

    /// Walk one level of blocks in schema-only mode. A block with no minimum
    /// occurrence cannot be scaffolded without a value, so it is omitted;
    /// otherwise exactly one representative instance is emitted.
    fn blocks_schema_only(&mut self, blocks: &BTreeMap<String, BlockSchema>) -> Result<()> {
        for (name, block) in blocks {
            self.block_schema_only(name, block)?;
        }
        Ok(())
    }

    fn block_schema_only(&mut self, name: &str, block: &BlockSchema) -> Result<()> {
        if block.min_items == 0 {
            return Ok(());
        }
        self.em.open(&format!("{name} {{"));
        self.attributes(&block.attributes, None, Mode::SchemaOnly)?;
        self.blocks_schema_only(&block.blocks)?;
        self.em.close("}");
        Ok(())
    }

    /// Walk one level of blocks bound to a parent value.
    fn blocks(&mut self, blocks: &BTreeMap<String, BlockSchema>, parent: &Value) -> Result<()> {
        for (name, block) in blocks {
            let bound = parent.attr(name).filter(|v| !v.is_null());

            let Some(value) = bound else {
                // No captured instances; fall back to schema-only semantics
                self.block_schema_only(name, block)?;
                continue;
            };

            if value.is_sensitive() {
                // The whole collection is opaque: exactly one placeholder
                // instance, element boundaries are unrecoverable.
                self.em.push(&format!("{name} {{ {SENSITIVE} }}"));
                continue;
            }

            for instance in expand(block.nesting, Some(value)) {
                match instance {
                    Instance::Anonymous(Some(element)) => {
                        if element.is_sensitive() {
                            self.em.push(&format!("{name} {{ {SENSITIVE} }}"));
                        } else {
                            self.em.open(&format!("{name} {{"));
                            self.attributes(&block.attributes, Some(element), Mode::Bound)?;
                            self.blocks(&block.blocks, element)?;
                            self.em.close("}");
                        }
                    }
                    Instance::Keyed(key, element) => {
                        let label = quote_string(key);
                        if element.is_sensitive() {
                            self.em
                                .push(&format!("{name} {label} {{ {SENSITIVE} }}"));
                        } else {
                            self.em.open(&format!("{name} {label} {{"));
                            self.attributes(&block.attributes, Some(element), Mode::Bound)?;
                            self.blocks(&block.blocks, element)?;
                            self.em.close("}");
                        }
                    }
                    Instance::Anonymous(None) => {}
                }
            }
        }
        Ok(())
    }
}

/// REQUIRED/OPTIONAL type annotation, schema-only mode only.
fn annotation(attr: &AttributeSchema, mode: Mode) -> Option<String> {
    if mode == Mode::Bound {
        return None;
    }
    let requirement = if attr.required { "REQUIRED" } else { "OPTIONAL" };
    Some(format!("{requirement} {}", attr.friendly_type()))
}

/// Append an annotation comment to an opening line.
fn annotated(header: String, note: Option<String>) -> String {
    match note {
        Some(note) => format!("{header} # {note}"),
        None => header,
    }
}
