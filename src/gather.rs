//! Gather-on-demand: the host supplies missing list entries and attributes the
//! first time a list is read in full.

use income_domain::{rust_decimal::Decimal, Attribute, Displayable, Fillable, Identifiable};
use thiserror::Error;
use uuid::Uuid;

/// The host could not complete a list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("gather failed: {0}")]
pub struct GatherError(pub String);

impl GatherError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Materializes the pending entries of a list. Invoked once, before the first full read.
pub trait Gatherer<T> {
    fn gather(&mut self, items: &mut Vec<T>) -> Result<(), GatherError>;
}

/// Adapts a closure into a [`Gatherer`].
pub struct FnGatherer<F>(F);

pub fn gather_fn<T, F>(f: F) -> FnGatherer<F>
where
    F: FnMut(&mut Vec<T>) -> Result<(), GatherError>,
{
    FnGatherer(f)
}

impl<T, F> Gatherer<T> for FnGatherer<F>
where
    F: FnMut(&mut Vec<T>) -> Result<(), GatherError>,
{
    fn gather(&mut self, items: &mut Vec<T>) -> Result<(), GatherError> {
        (self.0)(items)
    }
}

/// One attribute the host is asked to supply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeRequest {
    pub index: usize,
    pub id: Uuid,
    pub label: String,
    pub attribute: Attribute,
}

/// Supplies values for unset attributes. `Ok(None)` leaves the attribute unset.
pub trait AttributeResolver {
    fn resolve(&mut self, request: &AttributeRequest) -> Result<Option<Decimal>, GatherError>;
}

impl<F> AttributeResolver for F
where
    F: FnMut(&AttributeRequest) -> Result<Option<Decimal>, GatherError>,
{
    fn resolve(&mut self, request: &AttributeRequest) -> Result<Option<Decimal>, GatherError> {
        self(request)
    }
}

/// Walks every entry and asks the resolver for each attribute it still lacks.
pub struct ResolverGatherer<R> {
    resolver: R,
}

impl<R: AttributeResolver> ResolverGatherer<R> {
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }
}

impl<T, R> Gatherer<T> for ResolverGatherer<R>
where
    T: Fillable + Identifiable + Displayable,
    R: AttributeResolver,
{
    fn gather(&mut self, items: &mut Vec<T>) -> Result<(), GatherError> {
        for (index, item) in items.iter_mut().enumerate() {
            for attribute in item.missing_attributes() {
                let request = AttributeRequest {
                    index,
                    id: item.id(),
                    label: item.display_label(),
                    attribute,
                };
                match self.resolver.resolve(&request)? {
                    Some(value) => item
                        .fill(attribute, value)
                        .map_err(|err| GatherError::new(err.to_string()))?,
                    None => tracing::debug!(
                        index,
                        attribute = %attribute,
                        "resolver left attribute unset"
                    ),
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use income_domain::{Compensation, Income, Periodic};
    use rust_decimal_macros::dec;

    #[test]
    fn resolver_receives_each_missing_attribute() {
        let mut items = vec![Income::pending(Some("wages".into()), Compensation::default())];
        let mut asked = Vec::new();
        let mut gatherer = ResolverGatherer::new(
            |request: &AttributeRequest| -> Result<Option<Decimal>, GatherError> {
                asked.push(request.attribute);
                Ok(match request.attribute {
                    Attribute::Value => Some(dec!(400)),
                    Attribute::Period => Some(dec!(52)),
                    _ => None,
                })
            },
        );
        gatherer.gather(&mut items).unwrap();
        drop(gatherer);

        assert_eq!(asked, vec![Attribute::Value, Attribute::Period]);
        assert_eq!(items[0].amount(1), Ok(dec!(20800)));
    }

    #[test]
    fn invalid_resolved_value_fails_the_gather() {
        let mut items = vec![Income::pending(None, Compensation::Periodic { value: Some(dec!(1)) })];
        let mut gatherer = ResolverGatherer::new(
            |_: &AttributeRequest| -> Result<Option<Decimal>, GatherError> { Ok(Some(dec!(0.5))) },
        );
        let err = gatherer.gather(&mut items).unwrap_err();
        assert!(err.0.contains("period"), "{err}");
    }
}
