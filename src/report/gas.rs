use crate::{
    category::{Decoded, GasMode, GasStatus, Vocabulary},
    field::Field,
    message::DiveGasMessage,
};

/// Bits of a message index holding the index itself; the rest are flags.
const MESSAGE_INDEX_MASK: u16 = 0x0FFF;

/// A configured breathing gas.
#[derive(Clone, Debug, PartialEq)]
pub struct Gas {
    pub index: Option<u16>,
    /// %
    pub helium: Option<u8>,
    /// %
    pub oxygen: Option<u8>,
    pub status: Option<Decoded<GasStatus>>,
    pub mode: Option<Decoded<GasMode>>,
}

impl Gas {
    pub fn from_message(m: &DiveGasMessage) -> Self {
        Self {
            index: m.message_index.valid().map(|i| i & MESSAGE_INDEX_MASK),
            helium: m.helium_content.valid(),
            oxygen: m.oxygen_content.valid(),
            status: m.status.valid().map(GasStatus::decode),
            mode: m.mode.valid().map(GasMode::decode),
        }
    }
}
