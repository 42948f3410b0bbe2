// Cache refresh signalling between the transaction flows and the views
// that display backend-derived data (dashboard, transaction lists).
//
// The flows publish an event after the backend accepts a change; each view
// subscribes to the topics it renders and refetches when notified. This
// replaces ad-hoc sharing of a global query-cache handle with an explicit
// observer registration.

use std::fmt;

/// Cached data sets that views subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshTopic {
    Dashboard,
    TransactionSummary,
    PurchaseOrders,
    SalesOrders,
    VendorBills,
    CustomerInvoices,
    Payments,
    ContactInvoices,
    ContactBills,
}

/// Something happened that invalidates cached backend data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshEvent {
    /// The backend accepted a submitted transaction of any kind.
    TransactionCommitted,
    /// A payment was recorded against an invoice or bill.
    PaymentRecorded,
    /// An invoice moved between pending and paid.
    InvoiceStatusChanged,
}

impl RefreshEvent {
    // Dashboard, summary and contact views aggregate across every
    // transaction type, so all three events touch them.
    const DASHBOARD_TOPICS: [RefreshTopic; 4] = [
        RefreshTopic::Dashboard,
        RefreshTopic::TransactionSummary,
        RefreshTopic::ContactInvoices,
        RefreshTopic::ContactBills,
    ];

    /// Topics whose cached data this event invalidates.
    pub fn topics(&self) -> Vec<RefreshTopic> {
        let mut topics = Self::DASHBOARD_TOPICS.to_vec();
        match self {
            RefreshEvent::TransactionCommitted => {
                topics.extend([
                    RefreshTopic::PurchaseOrders,
                    RefreshTopic::SalesOrders,
                    RefreshTopic::VendorBills,
                    RefreshTopic::CustomerInvoices,
                    RefreshTopic::Payments,
                ]);
            }
            RefreshEvent::PaymentRecorded => {
                topics.push(RefreshTopic::Payments);
            }
            RefreshEvent::InvoiceStatusChanged => {
                topics.push(RefreshTopic::CustomerInvoices);
            }
        }
        topics
    }
}

impl fmt::Display for RefreshEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefreshEvent::TransactionCommitted => write!(f, "transaction_committed"),
            RefreshEvent::PaymentRecorded => write!(f, "payment_recorded"),
            RefreshEvent::InvoiceStatusChanged => write!(f, "invoice_status_changed"),
        }
    }
}

type Handler = Box<dyn Fn(&RefreshEvent) + Send>;

/// Synchronous fan-out bus for [`RefreshEvent`]s.
///
/// Everything runs within a single UI-event callback, so publish simply
/// walks the subscriber list in registration order.
#[derive(Default)]
pub struct RefreshBus {
    subscribers: Vec<(RefreshTopic, Handler)>,
}

impl RefreshBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for one topic. Handlers are never deregistered;
    /// a bus lives as long as the view layer that owns it.
    pub fn subscribe(&mut self, topic: RefreshTopic, handler: impl Fn(&RefreshEvent) + Send + 'static) {
        self.subscribers.push((topic, Box::new(handler)));
    }

    /// Notify every subscriber whose topic the event invalidates.
    ///
    /// Returns the number of handlers invoked.
    pub fn publish(&self, event: &RefreshEvent) -> usize {
        let topics = event.topics();
        let mut notified = 0;
        for (topic, handler) in &self.subscribers {
            if topics.contains(topic) {
                handler(event);
                notified += 1;
            }
        }
        tracing::debug!(%event, notified, "published refresh event");
        notified
    }
}

impl fmt::Debug for RefreshBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RefreshBus")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
