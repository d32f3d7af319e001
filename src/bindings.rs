// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*! Views that pair raw GPU-bound bytes with the description needed to address them.

Each view owns no memory; it borrows the bytes and produces cursor readers and writers
with the right geometry and format already chosen.
*/

pub mod array_buffer;
pub mod index_buffer;
pub mod texture;
pub mod texture_cube;

pub use array_buffer::{ArrayBufferData, ArrayBufferDataMut};
pub use index_buffer::{IndexBufferData, IndexBufferDataMut, IndexType};
pub use texture::{TextureData, TextureDataMut};
pub use texture_cube::{CubeFace, TextureCubeData, TextureCubeDataMut};

use crate::error::Error;

/// Fails with [`Error::BufferTooSmall`] if `actual < required`, warns if it is larger.
fn check_len(kind: &'static str, required: usize, actual: usize) -> Result<(), Error> {
    if actual < required {
        return Err(Error::BufferTooSmall { required, actual });
    }
    if actual > required {
        logwise::warn_sync!(
            "{kind} view uses {required} of {actual} bytes",
            kind = logwise::privacy::LogIt(&kind),
            required = logwise::privacy::LogIt(&required),
            actual = logwise::privacy::LogIt(&actual)
        );
    }
    Ok(())
}
