use alloc::{
    collections::BTreeMap,
    string::{String, ToString},
    sync::Arc,
    vec,
    vec::Vec,
};

use crate::{
    codec::Codec,
    context::DecodeContext,
    error::{Error, ErrorKind},
    escape, scan,
    writer::{Key, Writer},
};

type Factory<'de, T> = Arc<dyn Fn() -> T + Send + Sync + 'de>;

/// Codec for record types, built by registering named fields. See
/// [`object`].
pub struct Object<'de, T> {
    construct: Factory<'de, T>,
    fields: Vec<FieldEntry<'de, T>>,
    index: BTreeMap<String, usize>,
    num_required: usize,
}

struct FieldEntry<'de, T> {
    name: String,
    key: Key,
    required: bool,
    codec: Arc<dyn FieldCodec<'de, T> + Send + Sync + 'de>,
}

impl<T> Clone for FieldEntry<'_, T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            key: self.key.clone(),
            required: self.required,
            codec: Arc::clone(&self.codec),
        }
    }
}

impl<T> Clone for Object<'_, T> {
    fn clone(&self) -> Self {
        Self {
            construct: Arc::clone(&self.construct),
            fields: self.fields.clone(),
            index: self.index.clone(),
            num_required: self.num_required,
        }
    }
}

impl<T> core::fmt::Debug for Object<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Object")
            .field("fields", &self.fields.iter().map(|f| &f.name).collect::<Vec<_>>())
            .field("num_required", &self.num_required)
            .finish()
    }
}

/// How one registered field reads and writes the owning record.
trait FieldCodec<'de, T> {
    fn decode_into(&self, target: &mut T, ctx: &mut DecodeContext<'de>) -> Result<(), Error>;
    fn encode_from(&self, source: &T, writer: &mut Writer);
    fn should_encode_from(&self, source: &T) -> bool;
}

struct AccessorField<C, G, S> {
    codec: C,
    get: G,
    set: S,
}

impl<'de, T, C, G, S> FieldCodec<'de, T> for AccessorField<C, G, S>
where
    C: Codec<'de>,
    G: Fn(&T) -> &C::Value,
    S: Fn(&mut T, C::Value),
{
    fn decode_into(&self, target: &mut T, ctx: &mut DecodeContext<'de>) -> Result<(), Error> {
        let value = self.codec.decode(ctx)?;
        (self.set)(target, value);
        Ok(())
    }

    fn encode_from(&self, source: &T, writer: &mut Writer) {
        self.codec.encode((self.get)(source), writer);
    }

    fn should_encode_from(&self, source: &T) -> bool {
        self.codec.should_encode((self.get)(source))
    }
}

/// A field that is decoded for validation and presence tracking but never
/// stored or encoded.
struct IgnoredField<C> {
    codec: C,
}

impl<'de, T, C> FieldCodec<'de, T> for IgnoredField<C>
where
    C: Codec<'de>,
{
    fn decode_into(&self, _target: &mut T, ctx: &mut DecodeContext<'de>) -> Result<(), Error> {
        self.codec.decode(ctx)?;
        Ok(())
    }

    fn encode_from(&self, _source: &T, _writer: &mut Writer) {}

    fn should_encode_from(&self, _source: &T) -> bool {
        false
    }
}

impl<'de, T: 'de> Object<'de, T> {
    /// Creates an object codec for a `Default`-constructible record.
    #[must_use]
    pub fn new() -> Self
    where
        T: Default,
    {
        Self::with_factory(T::default)
    }

    /// Creates an object codec that builds the record with `factory`.
    ///
    /// Mandatory for types without a usable `Default`; the factory runs once
    /// per decoded object before any field is assigned.
    #[must_use]
    pub fn with_factory<F>(factory: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'de,
    {
        Self {
            construct: Arc::new(factory),
            fields: Vec::new(),
            index: BTreeMap::new(),
            num_required: 0,
        }
    }

    /// Registers a required field: decoding fails with
    /// `MissingRequiredField` if the key is never seen.
    ///
    /// `get` and `set` connect the field's codec to the record. Field names
    /// are used verbatim as JSON keys and escaped once, here. If `name` was
    /// already registered the first registration wins and this call is
    /// ignored.
    #[must_use]
    pub fn required<C, G, S>(self, name: &str, codec: C, get: G, set: S) -> Self
    where
        C: Codec<'de> + Send + Sync + 'de,
        G: Fn(&T) -> &C::Value + Send + Sync + 'de,
        S: Fn(&mut T, C::Value) + Send + Sync + 'de,
    {
        self.field(name, true, AccessorField { codec, get, set })
    }

    /// Registers an optional field: absence on decode leaves the record's
    /// value as the factory produced it.
    ///
    /// Duplicate names are ignored as for [`required`](Object::required).
    #[must_use]
    pub fn optional<C, G, S>(self, name: &str, codec: C, get: G, set: S) -> Self
    where
        C: Codec<'de> + Send + Sync + 'de,
        G: Fn(&T) -> &C::Value + Send + Sync + 'de,
        S: Fn(&mut T, C::Value) + Send + Sync + 'de,
    {
        self.field(name, false, AccessorField { codec, get, set })
    }

    /// Registers a required field whose value is validated by `codec` but
    /// not stored anywhere, and never encoded.
    #[must_use]
    pub fn required_ignored<C>(self, name: &str, codec: C) -> Self
    where
        C: Codec<'de> + Send + Sync + 'de,
    {
        self.field(name, true, IgnoredField { codec })
    }

    /// Registers an optional field whose value is validated by `codec` when
    /// present but not stored anywhere, and never encoded.
    #[must_use]
    pub fn optional_ignored<C>(self, name: &str, codec: C) -> Self
    where
        C: Codec<'de> + Send + Sync + 'de,
    {
        self.field(name, false, IgnoredField { codec })
    }

    fn field<F>(mut self, name: &str, required: bool, codec: F) -> Self
    where
        F: FieldCodec<'de, T> + Send + Sync + 'de,
    {
        if self.index.contains_key(name) {
            return self;
        }
        let id = self.fields.len();
        self.index.insert(name.to_string(), id);
        if required {
            self.num_required += 1;
        }
        self.fields.push(FieldEntry {
            name: name.to_string(),
            key: Key::new(name),
            required,
            codec: Arc::new(codec),
        });
        self
    }
}

impl<'de, T: Default + 'de> Default for Object<'de, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'de, T> Codec<'de> for Object<'de, T> {
    type Value = T;

    fn decode(&self, ctx: &mut DecodeContext<'de>) -> Result<T, Error> {
        let mut output = (self.construct)();
        let mut seen = vec![false; self.fields.len()];
        scan::decode_comma_separated(ctx, b'{', b'}', "'{'", "',' or '}'", |ctx| {
            let key = escape::decode_string(ctx)?;
            ctx.skip_whitespace();
            ctx.expect(b':', "':'")?;
            ctx.skip_whitespace();
            match self.index.get(&key) {
                Some(&id) => {
                    self.fields[id].codec.decode_into(&mut output, ctx)?;
                    seen[id] = true;
                }
                // Unknown keys are skipped structurally, not stored.
                None => scan::skip_value(ctx)?,
            }
            Ok(())
        })?;
        if self.num_required > 0 {
            for (field, seen) in self.fields.iter().zip(&seen) {
                if field.required && !seen {
                    return Err(
                        ctx.error(ErrorKind::MissingRequiredField(field.name.clone()))
                    );
                }
            }
        }
        Ok(output)
    }

    fn encode(&self, value: &T, writer: &mut Writer) {
        writer.in_object(|w| {
            for field in &self.fields {
                if field.codec.should_encode_from(value) {
                    w.write_key(&field.key);
                    field.codec.encode_from(value, w);
                }
            }
        });
    }
}

/// Codec mapping a JSON object to the record type `T`, with `T::default()`
/// as the starting value for each decode.
///
/// Fields are registered with [`required`](Object::required) and
/// [`optional`](Object::optional); keys not registered are skipped on
/// decode. Encoding emits fields in registration order.
#[must_use]
pub fn object<'de, T: Default + 'de>() -> Object<'de, T> {
    Object::new()
}

/// Codec mapping a JSON object to `T`, constructing the starting record
/// with `factory`. Required for types without a `Default` impl.
#[must_use]
pub fn object_with<'de, T: 'de, F>(factory: F) -> Object<'de, T>
where
    F: Fn() -> T + Send + Sync + 'de,
{
    Object::with_factory(factory)
}
