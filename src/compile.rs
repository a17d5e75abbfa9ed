//! Program compiler
//!
//! Ties validation and emission together for one [`SourceUnit`], and
//! aggregates a batch into a [`CompiledUnit`]. A failing unit never aborts
//! the batch: it is recorded as a [`UnitFailure`] and the rest still compile.

use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, warn};

use crate::ir::{emit, IrStatement};
use crate::source::SourceUnit;
use crate::util::{identifier_from, to_pascal_case};
use crate::validate::{validate, StructuralError};

/// One compiled function, ready for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompiledFunction {
    /// Canonical snake_case name; renderers re-case it per target
    pub name: String,
    /// Source name as supplied by the host
    pub source: String,
    pub source_hash: String,
    pub body: Vec<IrStatement>,
}

/// Why a unit produced no function
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum CompileFailure {
    #[error(transparent)]
    Structural(#[from] StructuralError),

    #[error("function name '{name}' is already taken by {first}")]
    DuplicateFunction { name: String, first: String },

    #[error("cannot derive a function name from '{file}'")]
    InvalidName { file: String },
}

/// A unit that failed, with the file it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitFailure {
    pub file: String,
    pub error: CompileFailure,
}

/// Every function that compiled, in discovery order, plus every failure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompiledUnit {
    pub functions: Vec<CompiledFunction>,
    pub failures: Vec<UnitFailure>,
}

impl CompiledUnit {
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Compile one unit: validate, then emit
pub fn compile(unit: &SourceUnit) -> Result<CompiledFunction, CompileFailure> {
    let brackets = validate(&unit.instructions)?;
    let name = identifier_from(unit.stem()).ok_or_else(|| CompileFailure::InvalidName {
        file: unit.name.clone(),
    })?;

    let body = emit(&unit.instructions, &brackets);

    debug!(
        unit = %unit.name,
        function = %name,
        statements = body.len(),
        loops = brackets.len(),
        "compiled unit"
    );

    Ok(CompiledFunction {
        name,
        source: unit.name.clone(),
        source_hash: unit.hash().to_string(),
        body,
    })
}

/// Key under which two names clash in some target.
///
/// Targets re-case names to snake, Pascal or camel case. Pascal case drops
/// the underscores, so `a_1` and `a1` only differ in the snake form.
fn clash_key(name: &str) -> String {
    to_pascal_case(name)
}

/// Compile a batch, keeping source order and reporting every failure
pub fn compile_all(units: &[SourceUnit]) -> CompiledUnit {
    let mut compiled = CompiledUnit::default();
    let mut taken: HashMap<String, String> = HashMap::new();

    for unit in units {
        let result = compile(unit).and_then(|function| {
            match taken.get(&clash_key(&function.name)) {
                Some(first) => Err(CompileFailure::DuplicateFunction {
                    name: function.name.clone(),
                    first: first.clone(),
                }),
                None => Ok(function),
            }
        });

        match result {
            Ok(function) => {
                taken.insert(clash_key(&function.name), unit.name.clone());
                compiled.functions.push(function);
            }
            Err(error) => {
                warn!(unit = %unit.name, %error, "skipping unit");
                compiled.failures.push(UnitFailure {
                    file: unit.name.clone(),
                    error,
                });
            }
        }
    }

    compiled
}
