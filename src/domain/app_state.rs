use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use super::{
    form::{QuoteForm, QuoteInput},
    reference::ReferenceData,
    summary::QuoteSummary,
    validation::{validate, ErrorMap},
};

/// A form that passed validation, as handed to whoever prices the shipment.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct QuoteRequest {
    pub form: QuoteForm,
    pub summary: QuoteSummary,
}

/// Receives quote requests once the form is valid.
#[cfg_attr(test, mockall::automock)]
pub trait QuoteRequestHandler {
    fn quote_requested(&self, request: &QuoteRequest);
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("{0} field(s) need attention before a quote can be requested")]
    Invalid(usize),
}

/// One form session: the form being edited, the errors from the last
/// submission attempt and the reference tables it was opened with.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub form: QuoteForm,
    pub errors: ErrorMap,
    pub reference: Arc<ReferenceData>,
}

impl AppState {
    pub fn new(form: QuoteForm, reference: Arc<ReferenceData>) -> Self {
        Self {
            form,
            errors: ErrorMap::default(),
            reference,
        }
    }

    /// Replaces the form with the result of the input. Errors stay until the next submit.
    pub fn apply(&mut self, input: QuoteInput) {
        tracing::debug!(?input, "applying form input");
        let previous = std::mem::take(&mut self.form);
        self.form = previous.apply(input);
    }

    pub fn summary(&self) -> QuoteSummary {
        QuoteSummary::compute(&self.form, &self.reference)
    }

    /// Validates the form and, if it passes, hands a request to `handler`.
    /// The error map from this attempt replaces whatever was shown before.
    pub fn submit(
        &mut self,
        handler: &dyn QuoteRequestHandler,
    ) -> Result<QuoteRequest, SubmitError> {
        self.errors = validate(&self.form);
        if !self.errors.is_empty() {
            tracing::info!(
                errors = self.errors.len(),
                "quote submission blocked by validation"
            );
            for (key, message) in self.errors.iter() {
                tracing::debug!(field = %key, reason = message, "validation failure");
            }
            return Err(SubmitError::Invalid(self.errors.len()));
        }

        let request = QuoteRequest {
            form: self.form.clone(),
            summary: self.summary(),
        };
        tracing::info!(
            route = %request.summary.route_label,
            packages = request.summary.package_count,
            "quote requested"
        );
        match serde_json::to_string(&request) {
            Ok(payload) => tracing::debug!(%payload, "quote request payload"),
            Err(err) => tracing::warn!("failed to encode quote request: {err}"),
        }
        handler.quote_requested(&request);
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::{
        entities::{AddressField, Leg, PackageField},
        validation::tests::complete_form,
    };

    fn session(form: QuoteForm) -> AppState {
        AppState::new(form, Arc::new(ReferenceData::default()))
    }

    #[test]
    fn valid_form_notifies_handler_once() {
        let mut handler = MockQuoteRequestHandler::new();
        handler
            .expect_quote_requested()
            .withf(|request| request.summary.route_label == "DXB → LHR")
            .times(1)
            .return_const(());

        let mut state = session(complete_form());
        let request = state.submit(&handler).unwrap();

        assert!(state.errors.is_empty());
        assert_eq!(request.summary.total_weight_display(), "2.0");
        assert_eq!(request.form, state.form);
    }

    #[test]
    fn invalid_form_never_reaches_handler() {
        let mut handler = MockQuoteRequestHandler::new();
        handler.expect_quote_requested().times(0);

        let mut state = AppState::default();
        let result = state.submit(&handler);

        assert_eq!(result, Err(SubmitError::Invalid(10)));
        assert_eq!(state.errors.len(), 10);
    }

    #[test]
    fn errors_are_replaced_not_merged() {
        let mut handler = MockQuoteRequestHandler::new();
        handler.expect_quote_requested().times(1).return_const(());

        let mut state = AppState::default();
        assert!(state.submit(&handler).is_err());
        assert_eq!(state.errors.len(), 10);

        state.form = complete_form().update_package_field(0, PackageField::Weight, "0");
        assert_eq!(state.submit(&handler), Err(SubmitError::Invalid(1)));
        assert!(state
            .errors
            .address(Leg::Origin, AddressField::Country)
            .is_none());

        state.form = complete_form();
        assert!(state.submit(&handler).is_ok());
        assert!(state.errors.is_empty());
    }

    #[test]
    fn editing_keeps_errors_until_next_submit() {
        let handler = MockQuoteRequestHandler::new();
        let mut state = AppState::default();
        let _ = state.submit(&handler);

        state.apply(QuoteInput::Address {
            leg: Leg::Origin,
            field: AddressField::PostalCode,
            value: "10001".to_string(),
        });

        assert_eq!(state.form.origin.postal_code, "10001");
        assert!(state
            .errors
            .address(Leg::Origin, AddressField::PostalCode)
            .is_some());
    }

    #[test]
    fn apply_routes_through_form_transitions() {
        let mut state = AppState::default();
        state.apply(QuoteInput::RemovePackage(0));
        assert_eq!(state.form, QuoteForm::default());

        state.apply(QuoteInput::AddPackage);
        state.apply(QuoteInput::Package {
            index: 1,
            field: PackageField::Weight,
            raw: "4.5".to_string(),
        });
        assert_eq!(state.summary().total_weight_display(), "4.5");
    }
}
