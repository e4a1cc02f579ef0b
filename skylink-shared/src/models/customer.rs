use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::pii::Masked;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoyaltyTier {
    Silver,
    Gold,
    Platinum,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoyaltyProgram {
    pub member_id: String,
    pub tier_level: LoyaltyTier,
    pub total_points: u64,
    pub available_points: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier_expiry_date: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPreferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seat_preference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal_preference: Option<String>,
}

/// Customer profile as owned by the customers service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub customer_id: String,
    pub email: Masked<String>,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<Masked<String>>,
    /// Passed through as the customers service writes it, date or timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loyalty_program: Option<LoyaltyProgram>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferences: Option<CustomerPreferences>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial profile update. Only the fields that are set are sent upstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomerRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<Masked<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<Masked<String>>,
    /// Passed through as the customers service writes it, date or timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loyalty_program: Option<LoyaltyProgram>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferences: Option<CustomerPreferences>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_debug_hides_contact_details() {
        let json = r#"
            {
                "customerId": "customer-123",
                "email": "test@example.com",
                "firstName": "John",
                "lastName": "Doe",
                "phoneNumber": "+1-555-0100",
                "loyaltyProgram": {
                    "memberId": "m-1",
                    "tierLevel": "GOLD",
                    "totalPoints": 1200,
                    "availablePoints": 800
                },
                "createdAt": "2024-01-01T00:00:00Z",
                "updatedAt": "2024-01-01T00:00:00Z"
            }
        "#;
        let customer: Customer = serde_json::from_str(json).unwrap();
        let debug = format!("{:?}", customer);
        assert!(!debug.contains("test@example.com"));
        assert!(!debug.contains("555-0100"));
        assert_eq!(customer.loyalty_program.unwrap().tier_level, LoyaltyTier::Gold);
    }

    #[test]
    fn test_dates_pass_through_in_either_form() {
        let json = r#"
            {
                "customerId": "customer-123",
                "email": "test@example.com",
                "firstName": "John",
                "lastName": "Doe",
                "dateOfBirth": "1990-05-15T00:00:00.000Z",
                "loyaltyProgram": {
                    "memberId": "m-1",
                    "tierLevel": "SILVER",
                    "totalPoints": 10,
                    "availablePoints": 10,
                    "tierExpiryDate": "2025-12-31"
                },
                "createdAt": "2024-01-01T00:00:00Z",
                "updatedAt": "2024-01-01T00:00:00Z"
            }
        "#;
        let customer: Customer = serde_json::from_str(json).unwrap();
        assert_eq!(customer.date_of_birth.as_deref(), Some("1990-05-15T00:00:00.000Z"));

        let value = serde_json::to_value(&customer).unwrap();
        assert_eq!(value["dateOfBirth"], "1990-05-15T00:00:00.000Z");
        assert_eq!(value["loyaltyProgram"]["tierExpiryDate"], "2025-12-31");
    }

    #[test]
    fn test_update_request_sends_only_set_fields() {
        let update = UpdateCustomerRequest {
            nationality: Some("NZ".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            serde_json::json!({ "nationality": "NZ" })
        );
    }
}
