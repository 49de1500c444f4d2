//! Property-based tests for paymill-lib
//!
//! Uses proptest to verify request building and response mapping hold for
//! arbitrary inputs.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use paymill_lib::request::{basic_auth, ApiRequest, HttpRequest};
use paymill_lib::{
    decode_response, filters, ApiError, HttpResponse, HttpTransport, ParamValue, Params, Paymill,
    PaymillConfig, Resource, ResponseCode,
};
use proptest::prelude::*;

/// Records requests and answers `200 {}`.
#[derive(Default)]
struct Recorder {
    requests: Mutex<Vec<HttpRequest>>,
}

impl HttpTransport for Recorder {
    fn execute(&self, request: &HttpRequest) -> paymill_lib::Result<HttpResponse> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(HttpResponse::new(200, "{}"))
    }
}

fn recording_client() -> (Paymill, Arc<Recorder>) {
    let recorder = Arc::new(Recorder::default());
    let paymill = Paymill::with_transport(PaymillConfig::new("test_key"), recorder.clone()).unwrap();
    (paymill, recorder)
}

fn field_map() -> impl Strategy<Value = BTreeMap<String, Option<String>>> {
    prop::collection::btree_map("[a-z_]{1,12}", prop::option::of("[ -~]{0,20}"), 0..8)
}

proptest! {
    /// The credential always decodes back to `<key>:`
    #[test]
    fn test_basic_auth_decodes_to_key(key in "[A-Za-z0-9_]{1,64}") {
        let header = basic_auth(&key);
        let encoded = header.strip_prefix("Basic ").unwrap();
        let decoded = STANDARD.decode(encoded).unwrap();
        prop_assert_eq!(String::from_utf8(decoded).unwrap(), format!("{}:", key));
    }

    /// POST bodies never carry null fields; PUT bodies carry them as empty values
    #[test]
    fn test_null_policy_by_method(fields in field_map()) {
        let params: Params = fields
            .iter()
            .map(|(k, v)| (k.clone(), ParamValue::from(v.clone())))
            .collect();
        let config = PaymillConfig::new("test_key");

        let post = ApiRequest::post("clients", params.clone(), "")
            .unwrap()
            .to_http(&config)
            .unwrap();
        let post_keys: Vec<String> = post.body_pairs().into_iter().map(|(k, _)| k).collect();
        let expected: Vec<String> = fields
            .iter()
            .filter(|(_, v)| v.is_some())
            .map(|(k, _)| k.clone())
            .collect();
        prop_assert_eq!(post_keys, expected);

        let put = ApiRequest::put("clients", params, "client_1")
            .unwrap()
            .to_http(&config)
            .unwrap();
        let put_pairs = put.body_pairs();
        prop_assert_eq!(put_pairs.len(), fields.len());
        for (key, value) in put_pairs {
            let sent = fields.get(&key).unwrap();
            prop_assert_eq!(value, sent.clone().unwrap_or_default());
        }
    }

    /// Every 5xx status maps to a server error with code 500
    #[test]
    fn test_server_statuses(status in 500u16..600, body in "[ -~]{0,40}") {
        let err = decode_response(HttpResponse::new(status, body)).unwrap_err();
        let api = err.api_error().unwrap();
        prop_assert!(matches!(api, ApiError::ServerError(_)));
        prop_assert_eq!(api.code(), 500);
        prop_assert_eq!(api.status(), status);
    }

    /// Every 2xx status with a JSON object body decodes
    #[test]
    fn test_success_statuses(status in 200u16..300, id in "[a-z0-9_]{1,20}") {
        let body = format!(r#"{{"data": {{"id": "{}"}}}}"#, id);
        let value = decode_response(HttpResponse::new(status, body)).unwrap();
        prop_assert_eq!(value["data"]["id"].as_str(), Some(id.as_str()));
    }

    /// An order outside a resource's sortable fields fails without a request
    #[test]
    fn test_unknown_order_rejected(order in "[a-z_]{1,16}", index in 0usize..7) {
        let resource = Resource::ALL[index];
        prop_assume!(!resource.order_fields().contains(&order.as_str()));

        let (paymill, recorder) = recording_client();
        let result = match resource {
            Resource::Payments => paymill.payments().list(Some(&order), None),
            Resource::Preauthorizations => paymill.preauthorizations().list(Some(&order), None),
            Resource::Transactions => paymill.transactions().list(Some(&order), None),
            Resource::Clients => paymill.clients().list(Some(&order), None),
            Resource::Refunds => paymill.refunds().list(Some(&order), None),
            Resource::Offers => paymill.offers().list(Some(&order), None),
            Resource::Subscriptions => paymill.subscriptions().list(Some(&order), None),
        };
        prop_assert!(result.is_err());
        prop_assert!(recorder.requests.lock().unwrap().is_empty());
    }

    /// An `order` smuggled in through the filters is held to the same field set
    #[test]
    fn test_unknown_order_in_filters_rejected(order in "[a-z_]{1,16}", index in 0usize..7) {
        let resource = Resource::ALL[index];
        prop_assume!(!resource.order_fields().contains(&order.as_str()));

        let (paymill, recorder) = recording_client();
        let filters = Some(Params::new().with("order", order.as_str()));
        let result = match resource {
            Resource::Payments => paymill.payments().list(Some("offset"), filters),
            Resource::Preauthorizations => paymill.preauthorizations().list(Some("offset"), filters),
            Resource::Transactions => paymill.transactions().list(Some("offset"), filters),
            Resource::Clients => paymill.clients().list(Some("offset"), filters),
            Resource::Refunds => paymill.refunds().list(Some("offset"), filters),
            Resource::Offers => paymill.offers().list(Some("offset"), filters),
            Resource::Subscriptions => paymill.subscriptions().list(Some("offset"), filters),
        };
        prop_assert!(result.is_err());
        prop_assert!(recorder.requests.lock().unwrap().is_empty());
    }

    /// Identifiers carrying path, query or fragment syntax never leave the process
    #[test]
    fn test_ids_cannot_escape_resource_path(
        prefix in "[a-z0-9_]{0,8}",
        marker in prop::sample::select(vec!["/", "?", "#", "%", "\\", "/../"]),
        suffix in "[a-z0-9_]{0,8}",
    ) {
        let id = format!("{}{}{}", prefix, marker, suffix);
        let (paymill, recorder) = recording_client();

        prop_assert!(paymill.payments().details(&id).is_err());
        prop_assert!(paymill.clients().remove(&id).is_err());
        prop_assert!(paymill.subscriptions().update(&id, true).is_err());
        prop_assert!(paymill.refunds().refund_transaction(&id, 100, None).is_err());
        prop_assert!(recorder.requests.lock().unwrap().is_empty());
    }

    /// Detail lookups put the identifier into the path verbatim
    #[test]
    fn test_details_path(id in "[a-z]{2,6}_[a-f0-9]{8,20}") {
        let (paymill, recorder) = recording_client();
        paymill.clients().details(&id).unwrap();

        let requests = recorder.requests.lock().unwrap();
        prop_assert_eq!(
            &requests[0].url,
            &format!("https://api.paymill.de/v2/clients/{}/", id)
        );
    }

    /// Amount filters render as `n`, `>n` and `<n`
    #[test]
    fn test_amount_filters(amount in any::<u32>()) {
        let amount = u64::from(amount);
        let value = |params: Params| params.get("amount").and_then(|v| v.as_str().map(str::to_string));
        prop_assert_eq!(value(filters::amount_exactly(amount)), Some(amount.to_string()));
        prop_assert_eq!(value(filters::amount_greater_than(amount)), Some(format!(">{}", amount)));
        prop_assert_eq!(value(filters::amount_less_than(amount)), Some(format!("<{}", amount)));
    }

    /// Codes outside the table never resolve
    #[test]
    fn test_unknown_response_codes(code in any::<u32>()) {
        let known = ResponseCode::all().any(|c| c.code() == code);
        prop_assert_eq!(ResponseCode::lookup(code).is_some(), known);
        prop_assert_eq!(ResponseCode::try_from(code).is_ok(), known);
    }
}
