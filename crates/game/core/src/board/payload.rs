//! Pair payloads: the damage and effect a matched pair unleashes.

/// Index of a payload inside the round's [`PayloadPool`].
///
/// Payload identity is what matching compares: two slots form a pair iff they
/// carry the same id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PayloadId(pub u32);

impl PayloadId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Visual effect requested when a payload hits the monster.
///
/// The rules never interpret the tag; it is forwarded to whoever renders hits.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EffectTag {
    /// No effect requested.
    #[default]
    None,
    Hit,
    FireHit,
    IceHit,
    RockHit,
    SlashHit,
    Poison,
    Explosion,
    Nature,
    Thunder,
}

impl EffectTag {
    /// Returns true if a renderer has something to spawn for this tag.
    pub const fn is_visible(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Damage/effect data shared by both tiles of a pair.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotPayload {
    pub name: String,
    pub damage: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effect: EffectTag,
}

impl SlotPayload {
    pub fn new(name: impl Into<String>, damage: u32, effect: EffectTag) -> Self {
        Self {
            name: name.into(),
            damage,
            effect,
        }
    }
}

/// Ordered collection of payloads available to a round.
///
/// Pairing takes payloads from the front of the pool, so content files list
/// their preferred payloads first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PayloadPool {
    payloads: Vec<SlotPayload>,
}

impl PayloadPool {
    pub fn new(payloads: Vec<SlotPayload>) -> Self {
        Self { payloads }
    }

    pub fn len(&self) -> usize {
        self.payloads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payloads.is_empty()
    }

    pub fn get(&self, id: PayloadId) -> Option<&SlotPayload> {
        self.payloads.get(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = (PayloadId, &SlotPayload)> {
        self.payloads
            .iter()
            .enumerate()
            .map(|(index, payload)| (PayloadId(index as u32), payload))
    }

    /// Built-in pool mirroring the shipped tile set.
    pub fn sample() -> Self {
        Self::new(vec![
            SlotPayload::new("Sword", 3, EffectTag::SlashHit),
            SlotPayload::new("Fireball", 5, EffectTag::FireHit),
            SlotPayload::new("Frost Shard", 4, EffectTag::IceHit),
            SlotPayload::new("Boulder", 6, EffectTag::RockHit),
            SlotPayload::new("Venom", 2, EffectTag::Poison),
            SlotPayload::new("Bomb", 7, EffectTag::Explosion),
            SlotPayload::new("Thorns", 3, EffectTag::Nature),
            SlotPayload::new("Lightning", 8, EffectTag::Thunder),
            SlotPayload::new("Punch", 1, EffectTag::Hit),
            SlotPayload::new("Pebble", 1, EffectTag::None),
        ])
    }
}

impl FromIterator<SlotPayload> for PayloadPool {
    fn from_iter<T: IntoIterator<Item = SlotPayload>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
