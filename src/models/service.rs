//! The closed set of Brightpearl service endpoints this crate addresses.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An addressable Brightpearl resource: a (service family, resource name)
/// pair.
///
/// The remote API groups resources under service families
/// (`order-service`, `contact-service`, `product-service`,
/// `warehouse-service`). This enumeration is the full set of resources the
/// crate issues range requests against; unknown short names are rejected
/// at construction rather than deep inside URI building.
///
/// # Example
///
/// ```
/// use brightpearl_rs::Service;
///
/// let service = Service::from_name("prices").expect("known service");
/// assert_eq!(service, Service::ProductPrice);
/// assert_eq!(service.family(), "product");
/// assert_eq!(service.resource(), "product-price");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Service {
    /// Sales and purchase orders (`order-service/order`).
    Order,
    /// Contact records (`contact-service/contact`).
    Contact,
    /// Postal addresses attached to contacts
    /// (`contact-service/postal-address`).
    PostalAddress,
    /// Product records (`product-service/product`).
    Product,
    /// Product prices across price lists
    /// (`product-service/product-price`).
    ProductPrice,
}

impl Service {
    /// The service family segment of the URI (without the `-service`
    /// suffix).
    pub fn family(&self) -> &'static str {
        match self {
            Service::Order => "order",
            Service::Contact | Service::PostalAddress => "contact",
            Service::Product | Service::ProductPrice => "product",
        }
    }

    /// The resource segment of the URI.
    pub fn resource(&self) -> &'static str {
        match self {
            Service::Order => "order",
            Service::Contact => "contact",
            Service::PostalAddress => "postal-address",
            Service::Product => "product",
            Service::ProductPrice => "product-price",
        }
    }

    /// Look a service up by its historical short name.
    ///
    /// Accepted names: `"order"`, `"contact"`, `"postal_addresses"`,
    /// `"products"`, `"prices"`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`](crate::Error::Config) for any other name.
    pub fn from_name(name: &str) -> crate::Result<Self> {
        match name {
            "order" => Ok(Service::Order),
            "contact" => Ok(Service::Contact),
            "postal_addresses" => Ok(Service::PostalAddress),
            "products" => Ok(Service::Product),
            "prices" => Ok(Service::ProductPrice),
            other => Err(crate::Error::Config(format!(
                "unknown service name: {other}"
            ))),
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-service/{}", self.family(), self.resource())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_descriptor_pair() {
        assert_eq!(
            (Service::Order.family(), Service::Order.resource()),
            ("order", "order")
        );
        assert_eq!(
            (Service::Contact.family(), Service::Contact.resource()),
            ("contact", "contact")
        );
        assert_eq!(
            (
                Service::PostalAddress.family(),
                Service::PostalAddress.resource()
            ),
            ("contact", "postal-address")
        );
        assert_eq!(
            (Service::Product.family(), Service::Product.resource()),
            ("product", "product")
        );
        assert_eq!(
            (
                Service::ProductPrice.family(),
                Service::ProductPrice.resource()
            ),
            ("product", "product-price")
        );
    }

    #[test]
    fn test_from_name_known() {
        assert_eq!(Service::from_name("order").unwrap(), Service::Order);
        assert_eq!(Service::from_name("contact").unwrap(), Service::Contact);
        assert_eq!(
            Service::from_name("postal_addresses").unwrap(),
            Service::PostalAddress
        );
        assert_eq!(Service::from_name("products").unwrap(), Service::Product);
        assert_eq!(Service::from_name("prices").unwrap(), Service::ProductPrice);
    }

    #[test]
    fn test_from_name_unknown_fails_early() {
        let err = Service::from_name("warehouse").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }
}
