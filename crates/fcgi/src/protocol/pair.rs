use bytes::Bytes;

/// A single FastCGI name/value pair.
///
/// Both sides are raw bytes: FastCGI places no encoding requirement on names or
/// values, and the same name may appear more than once in a block.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Pair {
    name: Bytes,
    value: Bytes,
}

impl Pair {
    pub fn new(name: impl Into<Bytes>, value: impl Into<Bytes>) -> Self {
        Self { name: name.into(), value: value.into() }
    }

    #[inline]
    pub fn name(&self) -> &Bytes {
        &self.name
    }

    #[inline]
    pub fn value(&self) -> &Bytes {
        &self.value
    }

    pub fn into_parts(self) -> (Bytes, Bytes) {
        (self.name, self.value)
    }
}

impl<N: Into<Bytes>, V: Into<Bytes>> From<(N, V)> for Pair {
    fn from((name, value): (N, V)) -> Self {
        Self::new(name, value)
    }
}

impl From<Pair> for (Bytes, Bytes) {
    fn from(pair: Pair) -> Self {
        pair.into_parts()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_from_tuple() {
        let pair = Pair::from((&b"SCRIPT_NAME"[..], &b"/index.php"[..]));
        assert_eq!(&pair.name()[..], b"SCRIPT_NAME");
        assert_eq!(&pair.value()[..], b"/index.php");

        let (name, value) = pair.into_parts();
        assert_eq!(name, Bytes::from_static(b"SCRIPT_NAME"));
        assert_eq!(value, Bytes::from_static(b"/index.php"));
    }
}
