/*
Copyright (C) 2022 Aurora McGinnis

This Source Code Form is subject to the terms of the Mozilla Public
License, v. 2.0. If a copy of the MPL was not distributed with this
file, You can obtain one at http://mozilla.org/MPL/2.0/.
*/

use log::kv::{Error as KvError, Key, Source, Value, VisitSource};

/// Reserved key rendered as a `[service]` prefix instead of a regular field.
pub const SERVICE_KEY: &str = "service";

/// A single key/value pair taken from an entry.
#[derive(Debug)]
pub struct Field<'kvs> {
    pub key: Key<'kvs>,
    pub value: Value<'kvs>,
}

/// The fields of one entry, ready to render: the service tag (if any) and every other pair sorted by
/// key.
#[derive(Debug, Default)]
pub struct SortedFields<'kvs> {
    service: Option<Value<'kvs>>,
    fields: Vec<Field<'kvs>>,
}

impl<'kvs> SortedFields<'kvs> {
    pub fn service(&self) -> Option<&Value<'kvs>> {
        self.service.as_ref()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<'kvs> IntoIterator for SortedFields<'kvs> {
    type Item = Field<'kvs>;
    type IntoIter = std::vec::IntoIter<Field<'kvs>>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

/// Collect and order the pairs of `source`. Keys compare by their bytes. When a key repeats, only the
/// first pair is kept.
pub fn sort_fields<'kvs>(source: &'kvs dyn Source) -> SortedFields<'kvs> {
    let mut collector = FieldCollector {
        service: None,
        fields: Vec::with_capacity(source.count()),
    };
    // A source that gives up part way still renders the pairs it yielded.
    let _ = source.visit(&mut collector);

    let mut fields = collector.fields;
    fields.sort_by(|a, b| a.key.as_str().cmp(b.key.as_str()));
    fields.dedup_by(|later, first| later.key == first.key);

    SortedFields {
        service: collector.service,
        fields,
    }
}

struct FieldCollector<'kvs> {
    service: Option<Value<'kvs>>,
    fields: Vec<Field<'kvs>>,
}

impl<'kvs> VisitSource<'kvs> for FieldCollector<'kvs> {
    fn visit_pair(&mut self, key: Key<'kvs>, value: Value<'kvs>) -> Result<(), KvError> {
        if key.as_str() == SERVICE_KEY {
            if self.service.is_none() {
                self.service = Some(value);
            }
        } else {
            self.fields.push(Field { key, value });
        }
        Ok(())
    }
}
