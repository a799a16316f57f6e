//! Compiled, immutable expressions

use crate::classify::TokenClassifier;
use crate::context::{Environment, EnvironmentBuilder};
use crate::expand::{collect_variables, expand_calls};
use boolex_diagnostics::Result;
use boolex_tree::ExprNode;
use indexmap::IndexSet;

/// An expression tree with its calls expanded and its names discovered.
///
/// The tree never changes after compilation. Bindings live in an
/// [`Environment`], so one compiled expression can be evaluated against
/// any number of environments, concurrently if needed.
#[derive(Debug)]
pub struct CompiledExpression {
    tree: ExprNode,
    functions: IndexSet<String>,
    variables: IndexSet<String>,
    classifier: TokenClassifier,
}

impl CompiledExpression {
    /// Expand the calls in a parsed tree and discover its names
    pub fn compile(mut tree: ExprNode) -> Result<Self> {
        let mut functions = IndexSet::new();
        expand_calls(&mut tree, &mut functions)?;
        tree.check_arity()?;

        let classifier = TokenClassifier::new(functions.clone());
        let variables = collect_variables(&tree, &classifier);

        log::debug!(
            "compiled expression with {} node(s), functions {:?}, variables {:?}",
            tree.len(),
            functions,
            variables
        );

        Ok(Self {
            tree,
            functions,
            variables,
            classifier,
        })
    }

    /// Parse and compile expression text
    pub fn from_source(source: &str) -> Result<Self> {
        Self::compile(boolex_parser::parse(source)?)
    }

    /// The expanded tree
    pub fn tree(&self) -> &ExprNode {
        &self.tree
    }

    /// Function names in discovery order
    pub fn functions(&self) -> &IndexSet<String> {
        &self.functions
    }

    /// Variable names in discovery order
    pub fn variables(&self) -> &IndexSet<String> {
        &self.variables
    }

    pub fn classifier(&self) -> &TokenClassifier {
        &self.classifier
    }

    /// Environment with a slot for every discovered name, all unbound
    pub fn environment(&self) -> Environment {
        Environment::new(self.variables.iter().cloned(), self.functions.iter().cloned())
    }

    pub fn environment_builder(&self) -> EnvironmentBuilder {
        EnvironmentBuilder::new(self)
    }
}
