//! Adapter for the orders backend.
//!
//! Every operation forwards the caller's identity: the orders service
//! chains calls to its own downstream services and re-validates if it
//! chooses to.

use identity_propagation::OutboundCallMetadata;
use tonic::transport::Channel;
use tonic::Request;

use crate::clients::proto::orders::orders_service_client::OrdersServiceClient;
use crate::clients::proto::orders::{
    CancelOrderRequest, CreateOrderRequest, FindAllOrdersResponse, FindOneOrderRequest,
    GetClientHistoryRequest, OrderResponse, QueryOrdersRequest, UpdateOrderStatusRequest,
};
use crate::error::Result;

use super::backend_result;

#[derive(Clone)]
pub struct OrdersAdapter {
    client: OrdersServiceClient<Channel>,
}

impl OrdersAdapter {
    pub fn new(channel: Channel) -> Self {
        Self {
            client: OrdersServiceClient::new(channel),
        }
    }

    pub async fn create_order(
        &self,
        req: CreateOrderRequest,
        meta: &OutboundCallMetadata,
    ) -> Result<OrderResponse> {
        let mut request = Request::new(req);
        meta.apply(&mut request);

        let mut client = self.client.clone();
        backend_result(client.create_order(request).await)
    }

    pub async fn find_all_orders(
        &self,
        req: QueryOrdersRequest,
        meta: &OutboundCallMetadata,
    ) -> Result<FindAllOrdersResponse> {
        let mut request = Request::new(req);
        meta.apply(&mut request);

        let mut client = self.client.clone();
        backend_result(client.find_all_orders(request).await)
    }

    pub async fn find_one_order(
        &self,
        req: FindOneOrderRequest,
        meta: &OutboundCallMetadata,
    ) -> Result<OrderResponse> {
        let mut request = Request::new(req);
        meta.apply(&mut request);

        let mut client = self.client.clone();
        backend_result(client.find_one_order(request).await)
    }

    pub async fn update_order_status(
        &self,
        req: UpdateOrderStatusRequest,
        meta: &OutboundCallMetadata,
    ) -> Result<OrderResponse> {
        let mut request = Request::new(req);
        meta.apply(&mut request);

        let mut client = self.client.clone();
        backend_result(client.update_order_status(request).await)
    }

    pub async fn cancel_order(
        &self,
        req: CancelOrderRequest,
        meta: &OutboundCallMetadata,
    ) -> Result<OrderResponse> {
        let mut request = Request::new(req);
        meta.apply(&mut request);

        let mut client = self.client.clone();
        backend_result(client.cancel_order(request).await)
    }

    pub async fn get_client_history(
        &self,
        req: GetClientHistoryRequest,
        meta: &OutboundCallMetadata,
    ) -> Result<FindAllOrdersResponse> {
        let mut request = Request::new(req);
        meta.apply(&mut request);

        let mut client = self.client.clone();
        backend_result(client.get_client_history(request).await)
    }
}
