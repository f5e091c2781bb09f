/// A type with a fixed size encoding, allowing it to be stored in an untyped
/// [`RawVector`](super::super::RawVector).
///
/// Implementors agree to a simple contract: [`write_bytes`](Record::write_bytes) and
/// [`read_bytes`](Record::read_bytes) are always given exactly [`WIDTH`](Record::WIDTH) bytes, and
/// reading back the bytes written by a value produces an equal value.
///
/// # Examples
/// ```
/// # use raw_collections::collections::contiguous::Record;
/// #[derive(Debug, PartialEq)]
/// struct Point {
///     x: i16,
///     y: i16,
/// }
///
/// impl Record for Point {
///     const WIDTH: usize = 4;
///
///     fn write_bytes(&self, bytes: &mut [u8]) {
///         self.x.write_bytes(&mut bytes[..2]);
///         self.y.write_bytes(&mut bytes[2..]);
///     }
///
///     fn read_bytes(bytes: &[u8]) -> Self {
///         Point {
///             x: i16::read_bytes(&bytes[..2]),
///             y: i16::read_bytes(&bytes[2..]),
///         }
///     }
/// }
///
/// let mut bytes = [0; Point::WIDTH];
/// Point { x: 1, y: -1 }.write_bytes(&mut bytes);
/// assert_eq!(Point::read_bytes(&bytes), Point { x: 1, y: -1 });
/// ```
pub trait Record: Sized {
    /// The number of bytes used to encode every value of this type.
    const WIDTH: usize;

    /// Encodes self into `bytes`.
    ///
    /// # Panics
    /// Implementations may panic if `bytes` isn't exactly [`WIDTH`](Record::WIDTH) bytes long.
    fn write_bytes(&self, bytes: &mut [u8]);

    /// Decodes a value from `bytes`.
    ///
    /// # Panics
    /// Implementations may panic if `bytes` isn't exactly [`WIDTH`](Record::WIDTH) bytes long.
    fn read_bytes(bytes: &[u8]) -> Self;
}

macro_rules! impl_record_for_int {
    ($($int:ty),*) => {
        $(
            /// Encoded in little-endian byte order.
            impl Record for $int {
                const WIDTH: usize = size_of::<$int>();

                fn write_bytes(&self, bytes: &mut [u8]) {
                    bytes.copy_from_slice(&self.to_le_bytes());
                }

                fn read_bytes(bytes: &[u8]) -> Self {
                    let mut buf = [0; size_of::<$int>()];
                    buf.copy_from_slice(bytes);
                    <$int>::from_le_bytes(buf)
                }
            }
        )*
    };
}

impl_record_for_int!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);

impl<const N: usize> Record for [u8; N] {
    const WIDTH: usize = N;

    fn write_bytes(&self, bytes: &mut [u8]) {
        bytes.copy_from_slice(self);
    }

    fn read_bytes(bytes: &[u8]) -> Self {
        let mut buf = [0; N];
        buf.copy_from_slice(bytes);
        buf
    }
}
