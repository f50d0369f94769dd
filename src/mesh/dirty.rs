use crate::mesh::AttributeChannel;

#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
/// The set of attribute channels a consumer has to re-upload.
pub struct DirtyFlags(u8);

bitflags::bitflags! {
    impl DirtyFlags: u8 {
        /// The position buffer changed.
        const POSITIONS = 1;
        /// The color buffer changed.
        const COLORS = 1 << 1;
        /// The normal buffer changed.
        const NORMALS = 1 << 2;
        /// The texture-coordinate buffer changed.
        const TEXCOORDS = 1 << 3;
    }
}

impl From<AttributeChannel> for DirtyFlags {
    fn from(channel: AttributeChannel) -> Self {
        match channel {
            AttributeChannel::Position => DirtyFlags::POSITIONS,
            AttributeChannel::Normal => DirtyFlags::NORMALS,
            AttributeChannel::Color => DirtyFlags::COLORS,
            AttributeChannel::TexCoord => DirtyFlags::TEXCOORDS,
        }
    }
}

/// Handle of a consumer registered on a quad set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ConsumerId(pub(crate) u32);

/// The signals accumulated for one consumer since it last drained them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConsumerSignals {
    /// The attribute channels that changed.
    pub dirty: DirtyFlags,
    /// Whether the bounding volume of the geometry was invalidated.
    pub volume_invalidated: bool,
}

impl ConsumerSignals {
    /// Returns `true` if no signal was received.
    pub fn is_empty(&self) -> bool {
        self.dirty.is_empty() && !self.volume_invalidated
    }
}
