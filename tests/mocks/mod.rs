mod mock_notifier;
mod mock_provider;

pub use mock_notifier::MockNotifier;
pub use mock_provider::MockDeliveryProvider;
