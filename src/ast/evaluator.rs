use crate::ast::{Expression, SymbolValues};
use crate::error::{Error, EvalError, ParseError};
use crate::parser::ExpressionParser;
use log::debug;
use lru::LruCache;
use rayon::prelude::*;
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Parses and evaluates expressions, remembering recently parsed trees.
pub struct Evaluator {
    cache: LruCache<String, Arc<Expression>>,
}

impl Evaluator {
    /// Creates a new `Evaluator` with a given maximum cache size.
    /// A size of zero is treated as one.
    pub fn new(max_cache_size: usize) -> Self {
        let capacity = NonZeroUsize::new(max_cache_size).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
        }
    }

    /// Parse an expression string into a tree, reusing a cached tree for
    /// text seen before. Failed parses are not cached.
    pub fn parse_expression(&mut self, expression: &str) -> Result<Arc<Expression>, ParseError> {
        if let Some(tree) = self.cache.get(expression) {
            debug!("Cache hit for expression: {}", expression);
            return Ok(Arc::clone(tree));
        }

        let tree = Arc::new(ExpressionParser::parse_expression(expression)?);
        self.cache.put(expression.to_string(), Arc::clone(&tree));
        Ok(tree)
    }

    /// Evaluates a given expression string against a provided context.
    ///
    /// # Arguments
    ///
    /// * `expression` - A string slice that holds the expression to be evaluated.
    /// * `context` - Values for the variables the expression refers to.
    ///
    /// # Returns
    ///
    /// * `Ok(f64)` if the evaluation succeeds.
    /// * `Err(Error)` if parsing or evaluation fails.
    pub fn evaluate_expression(
        &mut self,
        expression: &str,
        context: &SymbolValues,
    ) -> Result<f64, Error> {
        let tree = self.parse_expression(expression)?;
        Ok(tree.calculate(context)?)
    }

    /// Parses `expression` once and calculates it against every context in
    /// parallel. Results keep the order of `contexts`.
    pub fn evaluate_batch(
        &mut self,
        expression: &str,
        contexts: &[SymbolValues],
    ) -> Result<Vec<Result<f64, EvalError>>, ParseError> {
        let tree = self.parse_expression(expression)?;
        debug!(
            "Evaluating {} against {} contexts",
            expression,
            contexts.len()
        );
        Ok(contexts
            .par_iter()
            .map(|context| tree.calculate(context))
            .collect())
    }

    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(100)
    }
}
