//! CLI command implementations
//!
//! Commands write to any [`Write`] so they can be exercised without a
//! terminal.

use std::io::Write;

use anyhow::{Context, Result};
use mapkey_application::{Binding, KeyedRegistry};
use mapkey_domain::RegistryKey;
use serde::Serialize;

use crate::context::AppContext;
use crate::surfaces::{Surface, SurfaceKind};

/// One binding as reported by `keys`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BindingReport {
    /// Registry the binding belongs to
    pub registry: &'static str,
    /// Key label, unique within the registry
    pub key: String,
    /// Short display name of the key
    pub name: String,
    /// Binding description
    pub description: String,
    /// Display names of the alias keys the binding serves
    pub aliases: Vec<String>,
}

impl BindingReport {
    fn from_binding<K: RegistryKey>(registry: &'static str, binding: &Binding<K, dyn Surface>) -> Self {
        let mut aliases: Vec<String> = binding.aliases().iter().map(ToString::to_string).collect();
        aliases.sort();
        Self {
            registry,
            key: binding.key().label(),
            name: binding.key().to_string(),
            description: binding.description().to_string(),
            aliases,
        }
    }
}

/// Every binding of both surface registries, ordered by registry then key
pub fn binding_reports(context: &AppContext) -> Vec<BindingReport> {
    fn collect<K: RegistryKey>(
        name: &'static str,
        registry: &KeyedRegistry<K, dyn Surface>,
    ) -> Vec<BindingReport> {
        registry
            .sorted_bindings()
            .into_iter()
            .map(|binding| BindingReport::from_binding(name, binding))
            .collect()
    }

    let mut reports = collect("surfaces", context.surfaces());
    reports.extend(collect("surface_types", context.surface_types()));
    reports
}

/// `keys`: list registered keys
pub fn keys(context: &AppContext, json: bool, out: &mut impl Write) -> Result<()> {
    let reports = binding_reports(context);

    if json {
        serde_json::to_writer_pretty(&mut *out, &reports).context("Failed to encode key listing")?;
        writeln!(out)?;
        return Ok(());
    }

    for report in &reports {
        if report.aliases.is_empty() {
            writeln!(out, "{:<14} {:<18} {}", report.registry, report.name, report.description)?;
        } else {
            writeln!(
                out,
                "{:<14} {:<18} {} (also serves: {})",
                report.registry,
                report.name,
                report.description,
                report.aliases.join(", ")
            )?;
        }
    }
    Ok(())
}

/// `check`: verify every surface kind is bound and every provider succeeds
pub fn check(context: &AppContext, out: &mut impl Write) -> Result<()> {
    context
        .surfaces()
        .ensure_complete()
        .context("Surface registry is incomplete")?;

    let mut created = 0;
    for binding in context.surfaces().sorted_bindings() {
        context
            .surfaces()
            .create(binding.key())
            .with_context(|| format!("Surface '{}' failed to build", binding.key()))?;
        created += 1;
    }
    for binding in context.surface_types().sorted_bindings() {
        context
            .surface_types()
            .create(binding.key())
            .with_context(|| format!("Surface type '{}' failed to build", binding.key()))?;
        created += 1;
    }

    writeln!(out, "ok: {created} bindings built")?;
    Ok(())
}

/// `show <surface>`: render one surface
pub fn show(context: &AppContext, kind: SurfaceKind, out: &mut impl Write) -> Result<()> {
    let surface = context
        .surface(kind)
        .with_context(|| format!("Failed to build surface '{kind}'"))?;

    writeln!(out, "{}", surface.title())?;
    writeln!(out, "{}", surface.render())?;
    Ok(())
}
