//! Endpoints: the addressable destinations messages are delivered to.
//!
//! An endpoint pairs a device address with the channel it belongs to
//! and whatever profile data the client application has attached
//! (demographic, location, custom attributes, owning user).

use courier_model::shape;

use crate::channel::ChannelType;

shape! {
    /// Device and platform details of an endpoint.
    pub struct EndpointDemographic {
        "AppVersion" app_version: string,
        /// Locale as language tag, e.g. `en-US`.
        "Locale" locale: string,
        "Make" make: string,
        "Model" model: string,
        "ModelVersion" model_version: string,
        "Platform" platform: string,
        "PlatformVersion" platform_version: string,
        "Timezone" timezone: string,
    }
}

shape! {
    /// Geographic details of an endpoint.
    pub struct EndpointLocation {
        "City" city: string,
        /// ISO 3166-1 alpha-2 country code.
        "Country" country: string,
        "PostalCode" postal_code: string,
        "Region" region: string,
    }
}

shape! {
    /// The user an endpoint belongs to.
    pub struct EndpointUser {
        /// Custom attributes usable as segment criteria.
        "UserAttributes" user_attributes: str_list_map,
        "UserId" user_id: string,
    }
}

shape! {
    /// Caller-controlled fields for creating or updating an endpoint.
    pub struct EndpointRequest {
        /// Destination address: device token, email address, or phone
        /// number, depending on the channel.
        "Address" address: string,
        /// Custom attributes usable as segment criteria.
        "Attributes" attributes: str_list_map,
        "ChannelType" channel_type: enum_str ChannelType,
        "Demographic" demographic: record EndpointDemographic,
        /// When the endpoint was last updated by the client, RFC 3339.
        "EffectiveDate" effective_date: timestamp,
        /// `ACTIVE` or `INACTIVE`; inactive endpoints are skipped.
        "EndpointStatus" endpoint_status: string,
        "Location" location: record EndpointLocation,
        /// `ALL` or `NONE`.
        "OptOut" opt_out: string,
        "RequestId" request_id: string,
        "User" user: record EndpointUser,
    }
}

shape! {
    /// An endpoint as stored by the service.
    pub struct EndpointResponse {
        "Address" address: string,
        "ApplicationId" application_id: string,
        "Attributes" attributes: str_list_map,
        "ChannelType" channel_type: enum_str ChannelType,
        /// Batch identifier shared by endpoints updated together.
        "CohortId" cohort_id: string,
        "CreationDate" creation_date: timestamp,
        "Demographic" demographic: record EndpointDemographic,
        "EffectiveDate" effective_date: timestamp,
        "EndpointStatus" endpoint_status: string,
        "Id" id: string,
        "Location" location: record EndpointLocation,
        "OptOut" opt_out: string,
        "RequestId" request_id: string,
        "User" user: record EndpointUser,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_valued_attribute_entries_are_guarded_against_duplicates() {
        let mut req = EndpointRequest::new();
        req.add_attributes_entry("interests", vec!["science".to_string()])
            .unwrap();
        let err = req
            .add_attributes_entry("interests", vec!["sports".to_string()])
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "duplicate key (interests) for field Attributes",
        );
        assert_eq!(
            req.attributes().unwrap()["interests"],
            vec!["science".to_string()],
        );
    }

    #[test]
    fn live_map_handle_mutates_the_stored_attributes() {
        let mut req = EndpointRequest::new();
        req.add_attributes_entry("interests", vec!["science".to_string()])
            .unwrap();
        req.attributes_mut()
            .unwrap()
            .get_mut("interests")
            .unwrap()
            .push("sports".to_string());
        assert_eq!(req.attributes().unwrap()["interests"].len(), 2);
    }
}
