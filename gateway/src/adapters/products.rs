//! Adapter for the products (catalog) backend.
//!
//! The catalog service may be a stub or mid-rollout, so every operation
//! here degrades `Unimplemented` into an empty success-shaped response.

use identity_propagation::OutboundCallMetadata;
use tonic::transport::Channel;
use tonic::Request;

use crate::clients::proto::products::products_service_client::ProductsServiceClient;
use crate::clients::proto::products::{
    CreateProductRequest, DeleteProductRequest, DeleteProductResponse, GetProductRequest,
    GetProductsRequest, GetProductsResponse, ProductResponse, UpdateProductRequest,
};
use crate::error::Result;

use super::soft_unimplemented;

const TARGET: &str = "products";

#[derive(Clone)]
pub struct ProductsAdapter {
    client: ProductsServiceClient<Channel>,
}

impl ProductsAdapter {
    pub fn new(channel: Channel) -> Self {
        Self {
            client: ProductsServiceClient::new(channel),
        }
    }

    /// Returns an empty product list when the backend does not implement
    /// the operation.
    pub async fn get_products(&self) -> Result<GetProductsResponse> {
        let mut client = self.client.clone();
        soft_unimplemented(client.get_products(GetProductsRequest {}).await, TARGET)
    }

    pub async fn get_product(&self, id: String) -> Result<ProductResponse> {
        let mut client = self.client.clone();
        soft_unimplemented(client.get_product(GetProductRequest { id }).await, TARGET)
    }

    pub async fn create_product(
        &self,
        req: CreateProductRequest,
        meta: &OutboundCallMetadata,
    ) -> Result<ProductResponse> {
        let mut request = Request::new(req);
        meta.apply(&mut request);

        let mut client = self.client.clone();
        soft_unimplemented(client.create_product(request).await, TARGET)
    }

    pub async fn update_product(
        &self,
        req: UpdateProductRequest,
        meta: &OutboundCallMetadata,
    ) -> Result<ProductResponse> {
        let mut request = Request::new(req);
        meta.apply(&mut request);

        let mut client = self.client.clone();
        soft_unimplemented(client.update_product(request).await, TARGET)
    }

    pub async fn delete_product(
        &self,
        id: String,
        meta: &OutboundCallMetadata,
    ) -> Result<DeleteProductResponse> {
        let mut request = Request::new(DeleteProductRequest { id });
        meta.apply(&mut request);

        let mut client = self.client.clone();
        soft_unimplemented(client.delete_product(request).await, TARGET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tonic::{Response, Status};

    #[test]
    fn test_unimplemented_product_listing_degrades_to_empty_list() {
        let result: std::result::Result<Response<GetProductsResponse>, Status> =
            Err(Status::unimplemented("GetProducts not deployed"));

        let response = soft_unimplemented(result, TARGET).unwrap();

        assert!(response.products.is_empty());
    }

    #[test]
    fn test_unimplemented_product_lookup_degrades_to_empty_response() {
        let result: std::result::Result<Response<ProductResponse>, Status> =
            Err(Status::unimplemented("GetProduct not deployed"));

        let response = soft_unimplemented(result, TARGET).unwrap();

        assert!(response.product.is_none());
    }
}
