//! Adapter for the inventory backend.

use identity_propagation::OutboundCallMetadata;
use tonic::transport::Channel;
use tonic::Request;

use crate::clients::proto::inventory::inventory_service_client::InventoryServiceClient;
use crate::clients::proto::inventory::{
    AddProductRequest, AddProductResponse, GetAllProductsRequest, GetAllProductsResponse,
    GetProductByIdRequest, GetProductByIdResponse, SetMinimumStockRequest,
    SetMinimumStockResponse, StockItem, UpdateStockRequest, UpdateStockResponse,
};
use crate::error::Result;

use super::backend_result;

/// Stateless façade over the inventory service. Reads are anonymous; write
/// operations carry the caller's identity metadata.
#[derive(Clone)]
pub struct InventoryAdapter {
    client: InventoryServiceClient<Channel>,
}

impl InventoryAdapter {
    pub fn new(channel: Channel) -> Self {
        Self {
            client: InventoryServiceClient::new(channel),
        }
    }

    pub async fn get_all_products(&self) -> Result<GetAllProductsResponse> {
        let mut client = self.client.clone();
        backend_result(client.get_all_products(GetAllProductsRequest {}).await)
    }

    pub async fn get_product_by_id(&self, product_id: String) -> Result<GetProductByIdResponse> {
        let mut client = self.client.clone();
        backend_result(
            client
                .get_product_by_id(GetProductByIdRequest { product_id })
                .await,
        )
    }

    pub async fn add_product(
        &self,
        product: StockItem,
        meta: &OutboundCallMetadata,
    ) -> Result<AddProductResponse> {
        let mut request = Request::new(AddProductRequest {
            product: Some(product),
        });
        meta.apply(&mut request);

        let mut client = self.client.clone();
        backend_result(client.add_product(request).await)
    }

    pub async fn update_stock(
        &self,
        product_id: String,
        amount: i32,
        meta: &OutboundCallMetadata,
    ) -> Result<UpdateStockResponse> {
        let mut request = Request::new(UpdateStockRequest { product_id, amount });
        meta.apply(&mut request);

        let mut client = self.client.clone();
        backend_result(client.update_stock(request).await)
    }

    pub async fn set_minimum_stock(
        &self,
        product_id: String,
        minimum_stock: i32,
        meta: &OutboundCallMetadata,
    ) -> Result<SetMinimumStockResponse> {
        let mut request = Request::new(SetMinimumStockRequest {
            product_id,
            minimum_stock,
        });
        meta.apply(&mut request);

        let mut client = self.client.clone();
        backend_result(client.set_minimum_stock(request).await)
    }
}
