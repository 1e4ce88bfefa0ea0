// Copyright 2026 arraymath developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Arrays, matrices and vectors serialize as nested lists, the same form
//! [`Array::tolist`] produces. Deserializing checks that the lists are
//! rectangular and, for the fixed types, that the nesting depth fits.

use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::imp_prelude::*;
use crate::{Matrix, Nested, Vector};

/// **Requires crate feature `"serde"`**
impl<A> Serialize for Array<A>
where
    A: Clone + Serialize,
{
    fn serialize<Se>(&self, serializer: Se) -> Result<Se::Ok, Se::Error>
    where
        Se: Serializer,
    {
        self.tolist().serialize(serializer)
    }
}

/// **Requires crate feature `"serde"`**
impl<'de, A> Deserialize<'de> for Array<A>
where
    A: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Array<A>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let nested = Nested::<A>::deserialize(deserializer)?;
        Array::from_nested(nested).map_err(de::Error::custom)
    }
}

macro_rules! impl_fixed_serde {
    ($($name:ident)+) => {
        $(
        /// **Requires crate feature `"serde"`**
        impl<A> Serialize for $name<A>
        where
            A: Clone + Serialize,
        {
            fn serialize<Se>(&self, serializer: Se) -> Result<Se::Ok, Se::Error>
            where
                Se: Serializer,
            {
                self.as_array().serialize(serializer)
            }
        }

        /// **Requires crate feature `"serde"`**
        impl<'de, A> Deserialize<'de> for $name<A>
        where
            A: Deserialize<'de>,
        {
            fn deserialize<D>(deserializer: D) -> Result<$name<A>, D::Error>
            where
                D: Deserializer<'de>,
            {
                let array = Array::<A>::deserialize(deserializer)?;
                $name::from_array(array).map_err(de::Error::custom)
            }
        }
        )+
    };
}

impl_fixed_serde!(Matrix Vector);
