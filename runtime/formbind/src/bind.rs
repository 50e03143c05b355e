use std::any::type_name;
use std::collections::HashMap;
use std::hash::BuildHasher;

use indexmap::IndexMap;
use tracing::Level;
use tracing_log_error::log_error;

use crate::errors::BindError;
use crate::form::FormData;
use crate::record::{Record, Target};
use crate::source::Source;

/// Populate `target` with the values in a single-valued map.
///
/// Each key is associated with at most one value.
/// Check out [`from_source`] for the binding rules.
pub fn from_map<'a, H, T>(map: &HashMap<String, String, H>, target: T) -> Result<(), BindError>
where
    H: BuildHasher,
    T: Target<'a>,
{
    from_source(map, target)
}

/// Populate `target` with the values in an ordered multi-valued map.
///
/// Check out [`from_source`] for the binding rules.
pub fn from_multi_map<'a, H, T>(
    map: &IndexMap<String, Vec<String>, H>,
    target: T,
) -> Result<(), BindError>
where
    H: BuildHasher,
    T: Target<'a>,
{
    from_source(map, target)
}

/// Populate `target` with the values in a parsed form.
///
/// Check out [`from_source`] for the binding rules.
pub fn from_form<'a, T>(form: &FormData, target: T) -> Result<(), BindError>
where
    T: Target<'a>,
{
    from_source(form, target)
}

/// Parse `bytes` as an `application/x-www-form-urlencoded` payload (e.g. a query string,
/// without the leading `?`) and populate `target` with its values.
///
/// Check out [`from_source`] for the binding rules.
pub fn from_urlencoded<'a, T>(bytes: &[u8], target: T) -> Result<(), BindError>
where
    T: Target<'a>,
{
    from_source(&FormData::parse(bytes), target)
}

/// Populate `target` with the values provided by `source`.
///
/// # Target validation
///
/// `target` must be a mutable reference to a [`Record`].
/// Binding fails before touching any field with:
///
/// - [`BindError::NotAReference`] if a value was passed by value;
/// - [`BindError::NilTarget`] if `target` is `None`;
/// - [`BindError::NotARecord`] if `target` points to something that isn't a [`Record`].
///
/// # Field processing
///
/// Fields are processed in declaration order.
/// Fields marked with `#[bind(skip)]` are ignored.
/// For all other fields, the values associated with the field key are retrieved from `source`
/// and converted according to the rules documented on [`Bindable`](crate::Bindable).
///
/// Binding stops at the first conversion failure, returning
/// [`BindError::ConversionFailed`]. Fields that were processed before the failing one keep
/// their new values: the record must be treated as partially populated.
pub fn from_source<'a, S, T>(source: &S, target: T) -> Result<(), BindError>
where
    S: Source,
    T: Target<'a>,
{
    let outcome = target
        .into_record()
        .and_then(|record| record.bind_fields(source));
    if let Err(e) = &outcome {
        log_error!(e, level: Level::DEBUG, "Failed to bind input values");
    }
    outcome
}

pub(crate) fn bind_record<R: Record>(record: &mut R, source: &dyn Source) -> Result<(), BindError> {
    for field in R::fields() {
        let Some(assign) = field.assign_fn() else {
            tracing::trace!(field = field.name(), "Skipping field, it is not writable");
            continue;
        };
        let values = source.get(field.key());
        assign(record, values).map_err(|e| e.at_key(field.key()))?;
    }
    tracing::debug!(record = type_name::<R>(), "Bound all fields");
    Ok(())
}
