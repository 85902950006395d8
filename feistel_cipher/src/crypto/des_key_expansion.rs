use crate::crypto::cipher_types::{CipherConfiguration, Key, SubKeyList};
use crate::crypto::error::CipherError;
use crate::crypto::key_expansion::KeyExpansion;
use crate::crypto::tables::CipherTables;
use std::sync::Arc;

pub struct DesKeyExpansion {
    config: CipherConfiguration,
    tables: Arc<CipherTables>,
}

impl DesKeyExpansion {
    pub fn new(config: CipherConfiguration, tables: Arc<CipherTables>) -> Result<Self, CipherError> {
        config.validate(&tables)?;
        Ok(Self { config, tables })
    }
}

impl KeyExpansion for DesKeyExpansion {
    fn generate_round_keys(&self, key: &Key) -> Result<SubKeyList, CipherError> {
        if key.len() != self.config.key_size {
            return Err(CipherError::InvalidKey {
                expected: self.config.key_size,
                actual: key.len(),
            });
        }

        // 1) PC-1, unless the key already has the internal width
        let working = if key.len() == self.tables.internal_key_width() {
            key.bits().clone()
        } else {
            self.tables.key_reduction.apply(key.bits())
        };

        // 2) C and D halves
        let (mut c, mut d) = working.split_in_half();

        // 3) rotations accumulate from round to round, then PC-2
        let mut round_keys = Vec::with_capacity(self.config.number_of_rounds);
        for shift in self.tables.rotation_schedule.iter().take(self.config.number_of_rounds) {
            c = c.rotate_left(shift);
            d = d.rotate_left(shift);

            let cd = c.concat(&d);
            round_keys.push(self.tables.sub_key_selection.apply(&cd));
        }

        log::trace!("generated {} round keys", round_keys.len());
        Ok(SubKeyList::new(round_keys))
    }
}
