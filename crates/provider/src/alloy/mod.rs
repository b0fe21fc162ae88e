// This file is part of Pmfund.
//
// Pmfund is free software: you can redistribute it and/or modify it under the
// terms of the GNU Lesser General Public License as published by the Free Software
// Foundation, either version 3 of the License, or (at your option) any later version.
//
// Pmfund is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.
// See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with Pmfund.
// If not, see https://www.gnu.org/licenses/.

use alloy_network::EthereumWallet;
use alloy_provider::{Provider as AlloyProvider, ProviderBuilder};
use alloy_rpc_client::ClientBuilder;
use alloy_signer_local::PrivateKeySigner;
use alloy_transport_http::Http;
use anyhow::Context;
use reqwest::Client;
use url::Url;

pub(crate) mod paymaster;

/// Create a new alloy provider from a given RPC URL, with the signing
/// identity attached so that write calls are signed locally.
///
/// Construction opens no connection; the first RPC is issued by the first
/// call made through the provider.
pub fn new_alloy_provider(
    rpc_url: &str,
    signer: PrivateKeySigner,
) -> anyhow::Result<impl AlloyProvider<Http<Client>> + Clone> {
    let url = Url::parse(rpc_url).context("invalid rpc url")?;
    let client = ClientBuilder::default().http(url);
    let provider = ProviderBuilder::new()
        .with_recommended_fillers()
        .wallet(EthereumWallet::from(signer))
        .on_client(client);
    Ok(provider)
}
