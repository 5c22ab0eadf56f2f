/*!
 * Ordered translator chain.
 *
 * Hosts usually wire several translators, one per persistence technology in
 * the application. The chain asks each in turn and stops at the first
 * concrete verdict; a re-raised transaction failure short-circuits
 * immediately.
 */

use std::error::Error;

use super::{PersistenceExceptionTranslator, TranslationVerdict};

/// Chain of translators consulted in registration order
#[derive(Default)]
pub struct TranslatorChain {
    translators: Vec<Box<dyn PersistenceExceptionTranslator>>,
}

impl TranslatorChain {
    /// Create an empty chain
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a translator, builder style
    pub fn with(mut self, translator: impl PersistenceExceptionTranslator + 'static) -> Self {
        self.push(translator);
        self
    }

    /// Append a translator
    pub fn push(&mut self, translator: impl PersistenceExceptionTranslator + 'static) {
        self.translators.push(Box::new(translator));
    }

    /// Number of registered translators
    pub fn len(&self) -> usize {
        self.translators.len()
    }

    /// Whether the chain is empty
    pub fn is_empty(&self) -> bool {
        self.translators.is_empty()
    }
}

impl PersistenceExceptionTranslator for TranslatorChain {
    fn translate(&self, failure: &(dyn Error + 'static)) -> TranslationVerdict {
        for translator in &self.translators {
            if let Some(translated) = translator.translate(failure)? {
                return Ok(Some(translated));
            }
        }
        Ok(None)
    }
}
