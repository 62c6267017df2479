//! Constants sub-client.

use crate::client::EconiaClient;
use crate::decode;
use crate::domain::constants::{FlagConstant, IntegerConstant};
use crate::error::SdkError;
use crate::view::ViewClient;

/// Sub-client for the `get_<NAME>` constant views.
pub struct Constants<'a, V> {
    pub(crate) client: &'a EconiaClient<V>,
}

impl<'a, V: ViewClient> Constants<'a, V> {
    pub async fn integer(&self, constant: IntegerConstant) -> Result<u64, SdkError> {
        let value = self
            .client
            .view_one(constant.module(), &constant.function(), &[], &[])
            .await?;
        Ok(decode::decode_u64(&value)?)
    }

    pub async fn flag(&self, constant: FlagConstant) -> Result<bool, SdkError> {
        let value = self
            .client
            .view_one(constant.module(), &constant.function(), &[], &[])
            .await?;
        Ok(decode::decode_bool(&value)?)
    }
}
