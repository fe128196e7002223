//! Integration tests for infrastructure crate
//!
//! Tests cover:
//! - Weather and geolocation adapters against wiremock servers
//! - Full report assembly through `WeatherService`
//! - Response caching in front of a real adapter

use std::sync::Arc;

use application::{ApplicationError, GeoLocationPort, WeatherPort, WeatherService};
use domain::{CityName, UnitSystem};
use infrastructure::{
    CacheConfig, CachedWeatherAdapter, GeoLocationAdapter, GeolocationAppConfig, WeatherAdapter,
    WeatherAppConfig,
};
use secrecy::SecretString;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn current_body(city: &str, temp: f64) -> serde_json::Value {
    serde_json::json!({
        "weather": [{"id": 500, "main": "Rain", "description": "light rain", "icon": "10d"}],
        "main": {"temp": temp, "feels_like": temp - 1.0, "pressure": 1008, "humidity": 88},
        "wind": {"speed": 5.1},
        "clouds": {"all": 90},
        "dt": 1_717_243_200,
        "sys": {"country": "IE"},
        "name": city,
        "cod": 200
    })
}

fn item(dt_txt: &str, temp: f64, description: &str) -> serde_json::Value {
    serde_json::json!({
        "main": {"temp": temp},
        "weather": [{"description": description, "icon": "10d"}],
        "dt_txt": dt_txt
    })
}

fn forecast_body() -> serde_json::Value {
    serde_json::json!({
        "cod": "200",
        "list": [
            item("2024-06-01 21:00:00", 12.0, "light rain"),
            item("2024-06-02 00:00:00", 10.0, "light rain"),
            item("2024-06-02 03:00:00", 8.0, "overcast clouds"),
            item("2024-06-02 06:00:00", 9.0, "light rain"),
            item("2024-06-03 00:00:00", 14.0, "clear sky"),
            item("2024-06-03 03:00:00", 12.0, "clear sky")
        ],
        "city": {"name": "Dublin", "country": "IE"}
    })
}

async fn weather_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "Dublin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body("Dublin", 13.0)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("q", "Dublin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("q", "Atlantis"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(serde_json::json!({"cod": "404", "message": "city not found"})),
        )
        .mount(&server)
        .await;
    server
}

fn weather_adapter(server: &MockServer) -> WeatherAdapter {
    let config = WeatherAppConfig {
        api_key: Some(SecretString::from("test-key")),
        base_url: server.uri(),
        timeout_secs: 5,
    };
    WeatherAdapter::with_config(config.to_weather_config()).unwrap()
}

fn geolocation_adapter(server: &MockServer) -> GeoLocationAdapter {
    let config = GeolocationAppConfig {
        base_url: server.uri(),
        timeout_secs: 5,
    };
    GeoLocationAdapter::with_config(config.to_geolocation_config()).unwrap()
}

// ============================================================================
// Adapter Tests
// ============================================================================

mod adapter_tests {
    use super::*;

    #[tokio::test]
    async fn current_conditions_are_mapped() {
        let server = weather_server().await;
        let adapter = weather_adapter(&server);

        let conditions = adapter
            .get_current_conditions(&CityName::new("Dublin").unwrap(), UnitSystem::Metric)
            .await
            .unwrap();

        assert_eq!(conditions.location_label(), "Dublin, IE");
        assert_eq!(conditions.display_description(), "Light Rain");
        assert!((conditions.temperature.value() - 13.0).abs() < 1e-9);
        assert_eq!(conditions.humidity, 88);
    }

    #[tokio::test]
    async fn unknown_city_maps_to_city_not_found() {
        let server = weather_server().await;
        let adapter = weather_adapter(&server);

        let result = adapter
            .get_forecast_samples(&CityName::new("Atlantis").unwrap(), UnitSystem::Metric)
            .await;

        assert!(matches!(result, Err(ApplicationError::CityNotFound(_))));
    }

    #[tokio::test]
    async fn geolocation_is_mapped() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/json/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "city": "Dublin",
                "region": "Leinster",
                "country_name": "Ireland",
                "country_code": "IE",
                "latitude": 53.3331,
                "longitude": -6.2489
            })))
            .mount(&server)
            .await;

        let location = geolocation_adapter(&server).detect_location().await.unwrap();

        assert_eq!(location.city.as_str(), "Dublin");
        assert_eq!(location.region.as_deref(), Some("Leinster"));
        assert!(location.coordinates.is_some());
    }

    #[tokio::test]
    async fn geolocation_error_maps_to_location_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/json/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "error": true,
                "reason": "Reserved IP Address"
            })))
            .mount(&server)
            .await;

        let result = geolocation_adapter(&server).detect_location().await;

        assert!(matches!(
            result,
            Err(ApplicationError::LocationUnavailable(_))
        ));
    }
}

// ============================================================================
// Report Assembly Tests
// ============================================================================

mod report_tests {
    use super::*;

    #[tokio::test]
    async fn report_skips_first_date_and_averages_the_rest() {
        let server = weather_server().await;
        let service = WeatherService::new(
            Arc::new(weather_adapter(&server)),
            Arc::new(geolocation_adapter(&server)),
        );

        let report = service
            .report_for_city("  Dublin ", UnitSystem::Metric)
            .await
            .unwrap();

        assert_eq!(report.daily.len(), 2);

        let first = &report.daily[0];
        assert_eq!(first.date.to_string(), "2024-06-02");
        assert_eq!(first.samples, 3);
        assert!((first.average_temperature.value() - 9.0).abs() < 1e-9);
        assert_eq!(first.description, "light rain");

        let second = &report.daily[1];
        assert!((second.average_temperature.value() - 13.0).abs() < 1e-9);
        assert_eq!(second.description, "clear sky");
    }

    #[tokio::test]
    async fn blank_city_sends_no_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let service = WeatherService::new(
            Arc::new(weather_adapter(&server)),
            Arc::new(geolocation_adapter(&server)),
        );
        let result = service.report_for_city("   ", UnitSystem::Metric).await;

        assert_eq!(result.unwrap_err().to_string(), "Please enter a city name");
    }

    #[tokio::test]
    async fn here_resolves_city_then_reports() {
        let server = weather_server().await;
        Mock::given(method("GET"))
            .and(path("/json/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "city": "Dublin",
                "country_name": "Ireland"
            })))
            .mount(&server)
            .await;

        let service = WeatherService::new(
            Arc::new(weather_adapter(&server)),
            Arc::new(geolocation_adapter(&server)),
        );
        let located = service
            .report_for_current_location(UnitSystem::Metric)
            .await
            .unwrap();

        assert_eq!(located.location.city.as_str(), "Dublin");
        assert_eq!(located.report.current.city, "Dublin");
    }
}

// ============================================================================
// Caching Tests
// ============================================================================

mod caching_tests {
    use super::*;

    #[tokio::test]
    async fn cached_adapter_hits_provider_once() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/weather"))
            .respond_with(ResponseTemplate::new(200).set_body_json(current_body("Cork", 15.0)))
            .expect(1)
            .mount(&server)
            .await;

        let adapter = CachedWeatherAdapter::new(weather_adapter(&server), &CacheConfig::default());
        let cork = CityName::new("Cork").unwrap();

        for _ in 0..3 {
            let conditions = adapter
                .get_current_conditions(&cork, UnitSystem::Metric)
                .await
                .unwrap();
            assert_eq!(conditions.city, "Cork");
        }
    }
}
