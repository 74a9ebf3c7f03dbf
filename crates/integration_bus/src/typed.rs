//! Typed decorators over the raw Bus Tracker clients
//!
//! The decorators call the wrapped client and run its output through
//! [`parse_bus_response`]. They add no transport of their own.

use domain::TrackerError;

use crate::client::{AsyncBusTracker, BusTracker};
use crate::models::{
    AgenciesResponse, BusResponse, DetoursResponse, DirectionsResponse, LocalesResponse,
    PatternsResponse, PredictionsResponse, RoutesResponse, RtpiDataFeedsResponse,
    ServiceBulletinsResponse, StopsResponse, TimeResponse, VehiclesResponse,
};
use crate::params::{
    DetoursRequest, PatternsRequest, PredictionsRequest, ServiceBulletinsRequest, StopsRequest,
    VehiclesRequest,
};
use crate::parser::parse_bus_response;

/// Result of a typed Bus Tracker call
pub type TypedResult<T> = Result<BusResponse<T>, TrackerError>;

/// Typed wrapper around a blocking [`BusTracker`]
#[derive(Debug, Clone)]
pub struct TypedBusTracker<C> {
    inner: C,
}

impl<C: BusTracker> TypedBusTracker<C> {
    /// Wrap a raw client
    pub const fn new(inner: C) -> Self {
        Self { inner }
    }

    /// The wrapped client
    pub const fn inner(&self) -> &C {
        &self.inner
    }

    /// Unwrap the raw client
    pub fn into_inner(self) -> C {
        self.inner
    }

    /// `gettime`
    ///
    /// # Errors
    ///
    /// Transport failures, or `SchemaValidation` if the payload does not
    /// match; API error payloads come back as `Ok(Failure)`.
    pub fn get_time(&self, unix_time: bool) -> TypedResult<TimeResponse> {
        parse_bus_response(self.inner.get_time(unix_time)?)
    }

    /// `getrtpidatafeeds`
    ///
    /// # Errors
    ///
    /// See [`TypedBusTracker::get_time`].
    pub fn get_rtpi_data_feeds(&self) -> TypedResult<RtpiDataFeedsResponse> {
        parse_bus_response(self.inner.get_rtpi_data_feeds()?)
    }

    /// `getvehicles`
    ///
    /// # Errors
    ///
    /// `InvalidArgument` before any request, otherwise as
    /// [`TypedBusTracker::get_time`].
    pub fn get_vehicles(&self, request: &VehiclesRequest) -> TypedResult<VehiclesResponse> {
        parse_bus_response(self.inner.get_vehicles(request)?)
    }

    /// `getroutes`
    ///
    /// # Errors
    ///
    /// See [`TypedBusTracker::get_time`].
    pub fn get_routes(&self) -> TypedResult<RoutesResponse> {
        parse_bus_response(self.inner.get_routes()?)
    }

    /// `getdirections`
    ///
    /// # Errors
    ///
    /// See [`TypedBusTracker::get_vehicles`].
    pub fn get_directions(&self, rt: &str) -> TypedResult<DirectionsResponse> {
        parse_bus_response(self.inner.get_directions(rt)?)
    }

    /// `getstops`
    ///
    /// # Errors
    ///
    /// See [`TypedBusTracker::get_vehicles`].
    pub fn get_stops(&self, request: &StopsRequest) -> TypedResult<StopsResponse> {
        parse_bus_response(self.inner.get_stops(request)?)
    }

    /// `getpatterns`
    ///
    /// # Errors
    ///
    /// See [`TypedBusTracker::get_vehicles`].
    pub fn get_patterns(&self, request: &PatternsRequest) -> TypedResult<PatternsResponse> {
        parse_bus_response(self.inner.get_patterns(request)?)
    }

    /// `getpredictions`
    ///
    /// # Errors
    ///
    /// See [`TypedBusTracker::get_vehicles`].
    pub fn get_predictions(&self, request: &PredictionsRequest) -> TypedResult<PredictionsResponse> {
        parse_bus_response(self.inner.get_predictions(request)?)
    }

    /// `getservicebulletins`
    ///
    /// # Errors
    ///
    /// See [`TypedBusTracker::get_vehicles`].
    pub fn get_service_bulletins(
        &self,
        request: &ServiceBulletinsRequest,
    ) -> TypedResult<ServiceBulletinsResponse> {
        parse_bus_response(self.inner.get_service_bulletins(request)?)
    }

    /// `getlocalelist`
    ///
    /// # Errors
    ///
    /// See [`TypedBusTracker::get_time`].
    pub fn get_locale_list(&self, in_locale_language: bool) -> TypedResult<LocalesResponse> {
        parse_bus_response(self.inner.get_locale_list(in_locale_language)?)
    }

    /// `getdetours`
    ///
    /// # Errors
    ///
    /// See [`TypedBusTracker::get_vehicles`].
    pub fn get_detours(&self, request: &DetoursRequest) -> TypedResult<DetoursResponse> {
        parse_bus_response(self.inner.get_detours(request)?)
    }

    /// `getagencies`
    ///
    /// # Errors
    ///
    /// See [`TypedBusTracker::get_time`].
    pub fn get_agencies(&self) -> TypedResult<AgenciesResponse> {
        parse_bus_response(self.inner.get_agencies()?)
    }
}

/// Typed wrapper around an [`AsyncBusTracker`], usually a session
#[derive(Debug, Clone)]
pub struct AsyncTypedBusTracker<C> {
    inner: C,
}

impl<C: AsyncBusTracker> AsyncTypedBusTracker<C> {
    /// Wrap a raw client
    pub const fn new(inner: C) -> Self {
        Self { inner }
    }

    /// The wrapped client
    pub const fn inner(&self) -> &C {
        &self.inner
    }

    /// Unwrap the raw client, e.g. to close a session
    pub fn into_inner(self) -> C {
        self.inner
    }

    /// `gettime`
    pub async fn get_time(&self, unix_time: bool) -> TypedResult<TimeResponse> {
        parse_bus_response(self.inner.get_time(unix_time).await?)
    }

    /// `getrtpidatafeeds`
    pub async fn get_rtpi_data_feeds(&self) -> TypedResult<RtpiDataFeedsResponse> {
        parse_bus_response(self.inner.get_rtpi_data_feeds().await?)
    }

    /// `getvehicles`
    pub async fn get_vehicles(&self, request: &VehiclesRequest) -> TypedResult<VehiclesResponse> {
        parse_bus_response(self.inner.get_vehicles(request).await?)
    }

    /// `getroutes`
    pub async fn get_routes(&self) -> TypedResult<RoutesResponse> {
        parse_bus_response(self.inner.get_routes().await?)
    }

    /// `getdirections`
    pub async fn get_directions(&self, rt: &str) -> TypedResult<DirectionsResponse> {
        parse_bus_response(self.inner.get_directions(rt).await?)
    }

    /// `getstops`
    pub async fn get_stops(&self, request: &StopsRequest) -> TypedResult<StopsResponse> {
        parse_bus_response(self.inner.get_stops(request).await?)
    }

    /// `getpatterns`
    pub async fn get_patterns(&self, request: &PatternsRequest) -> TypedResult<PatternsResponse> {
        parse_bus_response(self.inner.get_patterns(request).await?)
    }

    /// `getpredictions`
    pub async fn get_predictions(
        &self,
        request: &PredictionsRequest,
    ) -> TypedResult<PredictionsResponse> {
        parse_bus_response(self.inner.get_predictions(request).await?)
    }

    /// `getservicebulletins`
    pub async fn get_service_bulletins(
        &self,
        request: &ServiceBulletinsRequest,
    ) -> TypedResult<ServiceBulletinsResponse> {
        parse_bus_response(self.inner.get_service_bulletins(request).await?)
    }

    /// `getlocalelist`
    pub async fn get_locale_list(&self, in_locale_language: bool) -> TypedResult<LocalesResponse> {
        parse_bus_response(self.inner.get_locale_list(in_locale_language).await?)
    }

    /// `getdetours`
    pub async fn get_detours(&self, request: &DetoursRequest) -> TypedResult<DetoursResponse> {
        parse_bus_response(self.inner.get_detours(request).await?)
    }

    /// `getagencies`
    pub async fn get_agencies(&self) -> TypedResult<AgenciesResponse> {
        parse_bus_response(self.inner.get_agencies().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{MockAsyncBusTracker, MockBusTracker};
    use crate::models::PassengerLoad;
    use serde_json::json;

    fn wrapped(body: serde_json::Value) -> serde_json::Value {
        json!({ "bustime-response": body })
    }

    #[test]
    fn routes_are_typed() {
        let mut mock = MockBusTracker::new();
        mock.expect_get_routes().times(1).returning(|| {
            Ok(wrapped(json!({
                "routes": [{"rt": "20", "rtnm": "Madison", "rtclr": "336633", "rtdd": "20"}]
            })))
        });

        let typed = TypedBusTracker::new(mock);
        let routes = typed.get_routes().unwrap().success().unwrap();
        assert_eq!(routes.routes[0].color.as_str(), "#336633");
    }

    #[test]
    fn api_error_payload_is_failure_variant() {
        let mut mock = MockBusTracker::new();
        mock.expect_get_directions()
            .withf(|rt| rt == "999")
            .returning(|_| Ok(wrapped(json!({"error": [{"msg": "Invalid route"}]}))));

        let typed = TypedBusTracker::new(mock);
        let response = typed.get_directions("999").unwrap();
        assert_eq!(response.failure().unwrap().error[0].msg, "Invalid route");
    }

    #[test]
    fn transport_error_passes_through() {
        let mut mock = MockBusTracker::new();
        mock.expect_get_agencies()
            .returning(|| Err(TrackerError::ConnectionFailed("refused".to_string())));

        let typed = TypedBusTracker::new(mock);
        assert!(matches!(
            typed.get_agencies(),
            Err(TrackerError::ConnectionFailed(_))
        ));
    }

    #[test]
    fn request_is_forwarded_unchanged() {
        let request = PredictionsRequest::by_stop("456").with_top(3);
        let expected = request.clone();

        let mut mock = MockBusTracker::new();
        mock.expect_get_predictions()
            .withf(move |r| *r == expected)
            .returning(|_| Ok(wrapped(json!({"prd": []}))));

        let typed = TypedBusTracker::new(mock);
        let predictions = typed.get_predictions(&request).unwrap().success().unwrap();
        assert!(predictions.predictions.is_empty());
    }

    #[test]
    fn schema_violation_is_error() {
        let mut mock = MockBusTracker::new();
        mock.expect_get_vehicles()
            .returning(|_| Ok(wrapped(json!({"vehicle": [{"vid": "1"}]}))));

        let typed = TypedBusTracker::new(mock);
        let err = typed
            .get_vehicles(&VehiclesRequest::by_vehicle("1"))
            .unwrap_err();
        assert!(matches!(err, TrackerError::SchemaValidation(_)));
    }

    #[tokio::test]
    async fn async_predictions_are_typed() {
        let mut mock = MockAsyncBusTracker::new();
        mock.expect_get_predictions().returning(|_| {
            Ok(wrapped(json!({"prd": [{
                "tmstmp": "20250717 22:47",
                "typ": "D",
                "stpid": "456",
                "stpnm": "Madison & Clark",
                "vid": "1234",
                "dstp": 0,
                "rt": "20",
                "rtdd": "20",
                "rtdir": "Eastbound",
                "des": "Michigan",
                "prdtm": "20250717 22:50",
                "tablockid": "20 -701",
                "tatripid": "1010101",
                "origtatripno": "259023185",
                "prdctdn": "DUE",
                "psgld": ""
            }]})))
        });

        let typed = AsyncTypedBusTracker::new(mock);
        let predictions = typed
            .get_predictions(&PredictionsRequest::by_stop("456"))
            .await
            .unwrap()
            .success()
            .unwrap();
        assert!(predictions.predictions[0].is_due());
        assert_eq!(
            predictions.predictions[0].passenger_load,
            Some(PassengerLoad::Unknown)
        );
    }

    #[tokio::test]
    async fn async_empty_detours() {
        let mut mock = MockAsyncBusTracker::new();
        mock.expect_get_detours()
            .returning(|_| Ok(wrapped(json!({"dtr": null}))));

        let typed = AsyncTypedBusTracker::new(mock);
        let detours = typed
            .get_detours(&DetoursRequest::all())
            .await
            .unwrap()
            .success()
            .unwrap();
        assert!(detours.detours.is_empty());
    }
}
