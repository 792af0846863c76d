mod helpers;
mod mocks;
mod payments;
mod send_sms;
