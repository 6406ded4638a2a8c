use core_config::TlsMaterial;
use tonic::transport::{Certificate, ClientTlsConfig, Identity};

/// Build a tonic TLS configuration from loaded PEM material
///
/// The CA bundle verifies the server. When the material carries a client
/// certificate and key, they are presented for mutual TLS. The server name
/// defaults to the endpoint host unless the material overrides it.
///
/// # Example
/// ```ignore
/// use core_config::{TlsConfig, TlsTarget};
///
/// let material = TlsConfig::from_env(TlsTarget::OffersClient).load()?;
/// let config = ChannelConfig::new().with_tls(client_tls_config(&material));
/// ```
pub fn client_tls_config(material: &TlsMaterial) -> ClientTlsConfig {
  let mut tls = ClientTlsConfig::new().ca_certificate(Certificate::from_pem(&material.ca_pem));

  if let Some((cert, key)) = &material.identity {
    tls = tls.identity(Identity::from_pem(cert, key));
  }

  if let Some(domain) = &material.domain {
    tls = tls.domain_name(domain.clone());
  }

  tracing::debug!(
    target: "grpc_client",
    mutual = material.identity.is_some(),
    domain = material.domain.as_deref().unwrap_or("<endpoint host>"),
    "Configured client TLS"
  );

  tls
}

