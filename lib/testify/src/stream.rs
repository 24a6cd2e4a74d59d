use std::io;

use futures::Stream;
use futures::stream;

/// A stream which yields every chunk successfully, then ends.
pub fn chunks(
    chunks: impl IntoIterator<Item = &'static str>,
) -> impl Stream<Item = io::Result<&'static [u8]>> + Unpin {
    stream::iter(chunks.into_iter().map(|chunk| Ok(chunk.as_bytes())).collect::<Vec<_>>())
}

/// A stream which yields every chunk, then fails with `err` instead of ending.
pub fn chunks_then_error(
    chunks: impl IntoIterator<Item = &'static str>,
    err: io::Error,
) -> impl Stream<Item = io::Result<&'static [u8]>> + Unpin {
    let mut items = chunks
        .into_iter()
        .map(|chunk| Ok(chunk.as_bytes()))
        .collect::<Vec<_>>();
    items.push(Err(err));

    stream::iter(items)
}
