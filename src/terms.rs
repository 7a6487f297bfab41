use crate::membership::Membership;

/// Named membership functions for one linguistic variable, in insertion
/// order. Names and shape parameters are validated when the set is handed
/// to [`Variables::add`](crate::Variables::add).
#[derive(Clone, Debug, Default)]
pub struct Terms(pub(crate) Vec<(String, Membership)>);

impl Terms {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn insert(&mut self, name: impl Into<String>, shape: Membership) {
        self.0.push((name.into(), shape));
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
