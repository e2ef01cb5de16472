//! Invoice Repository

use super::{RepoError, RepoResult, apply_update};
use crate::billing::{compute_order_billing, first_billing};
use crate::db::collections::{INVOICE, ORDER};
use crate::db::{Collection, DbService};
use crate::utils::PaginationParams;
use chrono::{Duration, Utc};
use shared::models::{Invoice, InvoiceCreate, InvoiceUpdate, InvoiceView};
use shared::util::{new_public_id, now_millis};

#[derive(Clone)]
pub struct InvoiceRepository {
    db: DbService,
    invoices: Collection,
    orders: Collection,
}

impl InvoiceRepository {
    pub fn new(db: &DbService) -> Self {
        Self {
            db: db.clone(),
            invoices: db.collection(INVOICE),
            orders: db.collection(ORDER),
        }
    }

    pub async fn find_all(&self, page: Option<&PaginationParams>) -> RepoResult<Vec<Invoice>> {
        self.invoices.find_all(page).await
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Invoice>> {
        self.invoices.find_by_key(id).await
    }

    /// Invoice for an existing order, due one day from now
    pub async fn create(&self, data: InvoiceCreate) -> RepoResult<Invoice> {
        if !self.orders.exists(&data.order_id).await? {
            return Err(RepoError::Reference("order"));
        }

        let now = now_millis();
        let invoice = Invoice {
            invoice_id: new_public_id(),
            order_id: data.order_id,
            payment_method: data.payment_method,
            payment_status: data.payment_status.unwrap_or_default(),
            payment_due_date: (Utc::now() + Duration::days(1)).timestamp_millis(),
            created_at: now,
            updated_at: now,
        };
        let key = invoice.invoice_id.clone();
        let created = self.invoices.insert(&key, invoice).await?;
        tracing::info!(invoice_id = %created.invoice_id, order_id = %created.order_id, "Invoice created");
        Ok(created)
    }

    pub async fn update(&self, id: &str, data: InvoiceUpdate) -> RepoResult<Invoice> {
        apply_update(&self.invoices, "invoice_id", id, &data).await
    }

    /// Invoice fields joined with the first billing group of its order.
    ///
    /// `Ok(None)` when the invoice does not exist; `NoItemsForOrder` when
    /// its order has nothing to bill.
    pub async fn view(&self, id: &str) -> RepoResult<Option<InvoiceView>> {
        let Some(invoice) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let billings = compute_order_billing(&self.db, &invoice.order_id).await?;
        let billing = first_billing(&invoice.order_id, billings)?;

        Ok(Some(InvoiceView {
            invoice_id: invoice.invoice_id,
            payment_method: invoice.payment_method,
            order_id: invoice.order_id,
            payment_status: invoice.payment_status,
            payment_due: billing.payment_due,
            table_number: billing.table_number,
            payment_due_date: invoice.payment_due_date,
            order_details: billing.order_items,
        }))
    }
}
