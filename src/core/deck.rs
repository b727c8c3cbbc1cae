//! Token deck for one round
//!
//! Even cardinality, every content value appears exactly twice. The multiset
//! is fixed at generation; only the per-token flags mutate afterwards.

use std::collections::HashSet;

use crate::core::content::{ContentError, ContentSource};
use crate::core::rng::SimpleRng;
use crate::types::TokenId;

/// One face-down card. Identity is its index in the deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub content: String,
    pub matched: bool,
    pub revealed: bool,
    pub peeking: bool,
}

impl Token {
    fn new(content: String) -> Self {
        Self {
            content,
            matched: false,
            revealed: false,
            peeking: false,
        }
    }
}

pub struct TokenDeck {
    tokens: Vec<Token>,
    source: Box<dyn ContentSource>,
}

impl TokenDeck {
    /// Pulls `pair_count` distinct values from the source, materializes two
    /// tokens per value and shuffles their order with the seeded RNG.
    pub fn generate(
        mut source: Box<dyn ContentSource>,
        pair_count: usize,
        rng: &mut SimpleRng,
    ) -> Result<Self, ContentError> {
        let values = source.values(pair_count)?;
        let mut seen = HashSet::new();
        for value in &values {
            if !seen.insert(value.clone()) {
                return Err(ContentError::DuplicateValue(value.clone()));
            }
        }
        let mut tokens: Vec<Token> = Vec::with_capacity(pair_count * 2);
        for value in values {
            tokens.push(Token::new(value.clone()));
            tokens.push(Token::new(value));
        }
        rng.shuffle(&mut tokens);
        Ok(Self { tokens, source })
    }

    /// Same content, different token. Symmetric; a token never matches itself.
    pub fn matches(&self, a: TokenId, b: TokenId) -> bool {
        if a == b {
            return false;
        }
        match (self.tokens.get(a), self.tokens.get(b)) {
            (Some(ta), Some(tb)) => self.source.is_pair(&ta.content, &tb.content),
            _ => false,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.tokens.iter().all(|t| t.matched)
    }

    /// Turns every token face up. Matched flags are untouched.
    pub fn reveal_all(&mut self) {
        for token in &mut self.tokens {
            token.revealed = true;
            token.peeking = false;
        }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn token(&self, id: TokenId) -> Option<&Token> {
        self.tokens.get(id)
    }

    pub(crate) fn token_mut(&mut self, id: TokenId) -> Option<&mut Token> {
        self.tokens.get_mut(id)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn pair_count(&self) -> usize {
        self.tokens.len() / 2
    }

    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }
}
