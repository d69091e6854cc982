// This file is part of pyseq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`Sequence`](crate::Sequence).
//!
//! - **Serialize**: as a sequence of `len` elements.
//! - **Deserialize**: from any sequence of at most
//!   [`Sequence::MAX_SIZE`](crate::Sequence::MAX_SIZE) elements, appended
//!   with the same capacity check as [`Sequence::append`](crate::Sequence::append).

// Crate imports
use crate::seq::Sequence;

// Core imports
use core::{fmt, marker::PhantomData};

// External imports - serde
use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};

impl<T: Serialize> Serialize for Sequence<T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let mut seq = s.serialize_seq(Some(self.len()))?;
        for item in self.iter() {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct SequenceVisitor<T>(PhantomData<T>);

impl<'de, T> de::Visitor<'de> for SequenceVisitor<T>
where
    T: Deserialize<'de>,
{
    type Value = Sequence<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence of elements")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, a: A) -> Result<Self::Value, A::Error> {
        // size hints come from the input and are not trusted
        let hint = a.size_hint().unwrap_or(0).min(4096);
        let mut out = Sequence::with_capacity(hint);
        append_elements(&mut out, a)?;
        Ok(out)
    }
}

/// Appends every remaining element of `a` to `out`, failing with
/// [`Error::Full`](crate::Error::Full) once `out` is at `MAX_SIZE`.
fn append_elements<'de, T, A>(out: &mut Sequence<T>, mut a: A) -> Result<(), A::Error>
where
    T: Deserialize<'de>,
    A: de::SeqAccess<'de>,
{
    while let Some(elem) = a.next_element::<T>()? {
        out.append(elem).map_err(<A::Error as de::Error>::custom)?;
    }
    Ok(())
}

impl<'de, T> Deserialize<'de> for Sequence<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(SequenceVisitor::<T>(PhantomData))
    }
}
