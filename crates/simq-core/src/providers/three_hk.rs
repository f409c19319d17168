//! 3HK result record and normalizer.

use serde_json::Value;

use crate::domain::Iccid;
use crate::formatting::field;
use crate::providers::json_text;

/// Combined view of the two 3HK lookups.
///
/// The MSISDN is required (the flow cannot reach step 2 without it);
/// everything else is display-only and tolerated when absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ThreeHkInfo {
    pub msisdn: String,
    // From the MSISDN lookup.
    pub brand: Option<String>,
    pub sub_brand: Option<String>,
    pub tenant_id: Option<String>,
    pub sales_channel: Option<String>,
    pub recharge_eligibility: Option<String>,
    pub minimum_recharge_amount: Option<String>,
    pub status: Option<String>,
    pub subs_end_date: Option<String>,
    // From the customer-info lookup.
    pub service_type: Option<String>,
}

impl ThreeHkInfo {
    /// Build from the two raw response bodies. `lookup` is the
    /// MSISDN-by-ICCID body, `customer` the customer-info body; either may
    /// be any JSON shape and missing fields simply stay unset.
    pub fn from_responses(msisdn: String, lookup: &Value, customer: &Value) -> Self {
        Self {
            msisdn,
            brand: json_text(lookup, "brand"),
            sub_brand: json_text(lookup, "subBrand"),
            tenant_id: json_text(lookup, "tenantId"),
            sales_channel: json_text(lookup, "salesChannel"),
            recharge_eligibility: json_text(lookup, "rechargeEligibility"),
            minimum_recharge_amount: json_text(lookup, "minimumRechargeAmount"),
            status: json_text(lookup, "status"),
            subs_end_date: json_text(lookup, "subsEndDate"),
            service_type: json_text(customer, "serviceType"),
        }
    }
}

pub fn render(iccid: &Iccid, info: &ThreeHkInfo) -> String {
    format!(
        "<b>ICCID:</b> <code>{}</code>\n\
         <b>NAME:</b> {} - {} ({} - {})\n\
         <b>TYPE:</b> {}\n\
         <b>NUMBER:</b> +852 {}\n\
         <b>RECHARGE:</b> {} ({}+)\n\
         <b>STATUS:</b> {}\n\
         <b>EXPIRY:</b> {}",
        iccid,
        field(info.brand.as_deref()),
        field(info.sub_brand.as_deref()),
        field(info.tenant_id.as_deref()),
        field(info.sales_channel.as_deref()),
        field(info.service_type.as_deref()),
        field(Some(info.msisdn.as_str())),
        field(info.recharge_eligibility.as_deref()),
        field(info.minimum_recharge_amount.as_deref()),
        field(info.status.as_deref()),
        field(info.subs_end_date.as_deref()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn iccid() -> Iccid {
        Iccid::parse("8985203000000000001").unwrap()
    }

    #[test]
    fn builds_from_both_responses() {
        let lookup = json!({
            "msisdn": "61234567",
            "brand": "3HK",
            "subBrand": "DIY",
            "tenantId": "HK",
            "salesChannel": "online",
            "rechargeEligibility": "Y",
            "minimumRechargeAmount": 100,
            "status": "Active",
            "subsEndDate": "2026-12-31",
        });
        let customer = json!({"serviceType": "prepaid"});
        let info = ThreeHkInfo::from_responses("61234567".to_string(), &lookup, &customer);

        // Numeric upstream values coerce to text.
        assert_eq!(info.minimum_recharge_amount.as_deref(), Some("100"));
        assert_eq!(info.service_type.as_deref(), Some("prepaid"));

        let out = render(&iccid(), &info);
        assert!(out.contains("<b>NAME:</b> 3HK - DIY (HK - online)"));
        assert!(out.contains("<b>TYPE:</b> prepaid"));
        assert!(out.contains("<b>NUMBER:</b> +852 61234567"));
        assert!(out.contains("<b>RECHARGE:</b> Y (100+)"));
        assert!(out.contains("<b>STATUS:</b> Active"));
        assert!(out.contains("<b>EXPIRY:</b> 2026-12-31"));
    }

    #[test]
    fn partial_upstream_data_still_renders() {
        let info = ThreeHkInfo::from_responses(
            "61234567".to_string(),
            &json!({"brand": "3HK"}),
            &Value::Null,
        );
        let out = render(&iccid(), &info);
        assert!(out.contains("<b>NAME:</b> 3HK - unknown (unknown - unknown)"));
        assert!(out.contains("<b>TYPE:</b> unknown"));
    }
}
