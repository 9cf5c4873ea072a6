//! Omni Core RPC methods.
//!
//! Each method forwards its arguments, in the daemon's positional order, to
//! [`OmniClient::call`]. Amounts are decimal strings, as the daemon expects.
//! Transaction-creating methods return the hex-encoded transaction hash.

use transport::{Param, Result};
use types::{AddressBalance, Balance, CrowdsaleTerms, DexAction, NewProperty, OmniInfo};

use crate::OmniClient;

impl OmniClient {
    /// `omni_getinfo`: state of the Omni layer.
    pub async fn get_info(&self) -> Result<OmniInfo> { self.call("omni_getinfo", &[]).await }

    /// `omni_getallbalancesforaddress`: every property balance held by `address`.
    pub async fn get_all_balances_for_address(&self, address: &str) -> Result<Vec<Balance>> {
        self.call("omni_getallbalancesforaddress", &[Param::from(address)]).await
    }

    /// `omni_getbalance`: balance of one property held by `address`.
    pub async fn get_balance(&self, address: &str, property_id: u32) -> Result<AddressBalance> {
        self.call("omni_getbalance", &[Param::from(address), Param::from(property_id)]).await
    }

    /// `omni_send`: simple send of `amount` tokens.
    pub async fn send(
        &self,
        from_address: &str,
        to_address: &str,
        property_id: u32,
        amount: &str,
    ) -> Result<String> {
        self.call("omni_send", &[
            Param::from(from_address),
            Param::from(to_address),
            Param::from(property_id),
            Param::from(amount),
        ])
        .await
    }

    /// `omni_senddexsell`: place, update, or cancel a sell offer on the
    /// traditional distributed exchange.
    ///
    /// `payment_window` is in blocks.
    #[allow(clippy::too_many_arguments)]
    pub async fn send_dex_sell(
        &self,
        from_address: &str,
        property_id_for_sale: u32,
        amount_for_sale: &str,
        amount_desired: &str,
        payment_window: u8,
        min_accept_fee: &str,
        action: DexAction,
    ) -> Result<String> {
        self.call("omni_senddexsell", &[
            Param::from(from_address),
            Param::from(property_id_for_sale),
            Param::from(amount_for_sale),
            Param::from(amount_desired),
            Param::from(payment_window),
            Param::from(min_accept_fee),
            Param::from(action.code()),
        ])
        .await
    }

    /// `omni_senddexaccept`: accept an offer on the traditional distributed
    /// exchange. `override_fee` skips the daemon's fee sanity check.
    pub async fn send_dex_accept(
        &self,
        from_address: &str,
        to_address: &str,
        property_id: u32,
        amount: &str,
        override_fee: bool,
    ) -> Result<String> {
        self.call("omni_senddexaccept", &[
            Param::from(from_address),
            Param::from(to_address),
            Param::from(property_id),
            Param::from(amount),
            Param::from(override_fee),
        ])
        .await
    }

    /// `omni_sendissuancecrowdsale`: create a property through a crowdsale.
    pub async fn send_issuance_crowdsale(
        &self,
        from_address: &str,
        property: &NewProperty,
        terms: &CrowdsaleTerms,
    ) -> Result<String> {
        let mut params = issuance_params(from_address, property);
        params.extend([
            Param::from(terms.property_id_desired),
            Param::from(&terms.tokens_per_unit),
            Param::from(terms.deadline),
            Param::from(terms.early_bonus),
            Param::from(terms.issuer_percentage),
        ]);
        self.call("omni_sendissuancecrowdsale", &params).await
    }

    /// `omni_sendissuancefixed`: create a property with a fixed supply.
    pub async fn send_issuance_fixed(
        &self,
        from_address: &str,
        property: &NewProperty,
        amount: &str,
    ) -> Result<String> {
        let mut params = issuance_params(from_address, property);
        params.push(Param::from(amount));
        self.call("omni_sendissuancefixed", &params).await
    }

    /// `omni_sendissuancemanaged`: create a property with a manageable supply.
    pub async fn send_issuance_managed(
        &self,
        from_address: &str,
        property: &NewProperty,
    ) -> Result<String> {
        self.call("omni_sendissuancemanaged", &issuance_params(from_address, property)).await
    }

    /// `omni_sendsto`: send tokens to the owners of `distribution_property`.
    pub async fn send_sto(
        &self,
        from_address: &str,
        property_id: u32,
        amount: &str,
        redeem_address: &str,
        distribution_property: u32,
    ) -> Result<String> {
        self.call("omni_sendsto", &[
            Param::from(from_address),
            Param::from(property_id),
            Param::from(amount),
            Param::from(redeem_address),
            Param::from(distribution_property),
        ])
        .await
    }

    /// `omni_sendgrant`: issue new tokens of a managed property.
    pub async fn send_grant(
        &self,
        from_address: &str,
        to_address: &str,
        property_id: u32,
        amount: &str,
        memo: &str,
    ) -> Result<String> {
        self.call("omni_sendgrant", &[
            Param::from(from_address),
            Param::from(to_address),
            Param::from(property_id),
            Param::from(amount),
            Param::from(memo),
        ])
        .await
    }

    /// `omni_sendrevoke`: destroy tokens of a managed property.
    pub async fn send_revoke(
        &self,
        from_address: &str,
        property_id: u32,
        amount: &str,
        memo: &str,
    ) -> Result<String> {
        self.call("omni_sendrevoke", &[
            Param::from(from_address),
            Param::from(property_id),
            Param::from(amount),
            Param::from(memo),
        ])
        .await
    }

    /// `omni_sendclosecrowdsale`: close a crowdsale before its deadline.
    pub async fn send_close_crowdsale(&self, from_address: &str, property_id: u32) -> Result<String> {
        self.call("omni_sendclosecrowdsale", &[Param::from(from_address), Param::from(property_id)])
            .await
    }
}

/// Sender followed by the property description, shared by all issuance calls.
fn issuance_params(from_address: &str, property: &NewProperty) -> Vec<Param> {
    vec![
        Param::from(from_address),
        Param::from(property.ecosystem.code()),
        Param::from(property.token_type.code()),
        Param::from(property.previous_id),
        Param::from(&property.category),
        Param::from(&property.subcategory),
        Param::from(&property.name),
        Param::from(&property.url),
        Param::from(&property.data),
    ]
}

#[cfg(test)]
mod tests {
    use types::{Ecosystem, TokenType};

    use super::*;

    #[test]
    fn test_issuance_params_order() {
        let property = NewProperty {
            ecosystem: Ecosystem::Test,
            token_type: TokenType::Indivisible,
            previous_id: 0,
            category: "Companies".to_string(),
            subcategory: "Bitcoin Mining".to_string(),
            name: "Quantum Miner".to_string(),
            url: "tokens.com".to_string(),
            data: "".to_string(),
        };

        assert_eq!(issuance_params("1From", &property), vec![
            Param::Str("1From".to_string()),
            Param::UInt(2),
            Param::UInt(1),
            Param::UInt(0),
            Param::Str("Companies".to_string()),
            Param::Str("Bitcoin Mining".to_string()),
            Param::Str("Quantum Miner".to_string()),
            Param::Str("tokens.com".to_string()),
            Param::Str("".to_string()),
        ]);
    }
}
