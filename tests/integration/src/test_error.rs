//! S3 error-response integration tests.

#[cfg(test)]
mod tests {
    use aws_sdk_s3::primitives::ByteStream;

    use crate::{cleanup_bucket, create_test_bucket, s3_client, test_bucket_name};

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_return_no_such_bucket_for_unknown_bucket() {
        let client = s3_client();
        let bucket = test_bucket_name("missing");

        let err = client
            .head_bucket()
            .bucket(&bucket)
            .send()
            .await
            .expect_err("head_bucket on unknown bucket should fail");

        let status = err
            .into_service_error()
            .meta()
            .clone();
        assert_eq!(status.code(), Some("NoSuchBucket"));
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_return_no_such_key_for_missing_object() {
        let client = s3_client();
        let bucket = create_test_bucket(&client, "nosuchkey").await;

        let err = client
            .get_object()
            .bucket(&bucket)
            .key("does-not-exist.txt")
            .send()
            .await
            .expect_err("get_object on missing key should fail");

        assert_eq!(err.into_service_error().meta().code(), Some("NoSuchKey"));

        cleanup_bucket(&client, &bucket).await;
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_return_bucket_already_owned_by_you_on_duplicate_create() {
        let client = s3_client();
        let bucket = create_test_bucket(&client, "dupe").await;

        let err = client
            .create_bucket()
            .bucket(&bucket)
            .send()
            .await
            .expect_err("re-creating the same bucket should fail");

        assert_eq!(
            err.into_service_error().meta().code(),
            Some("BucketAlreadyOwnedByYou")
        );

        cleanup_bucket(&client, &bucket).await;
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_return_bucket_not_empty_on_delete_with_objects() {
        let client = s3_client();
        let bucket = create_test_bucket(&client, "notempty").await;

        client
            .put_object()
            .bucket(&bucket)
            .key("stays.txt")
            .body(ByteStream::from_static(b"data"))
            .send()
            .await
            .expect("put_object");

        let err = client
            .delete_bucket()
            .bucket(&bucket)
            .send()
            .await
            .expect_err("deleting a non-empty bucket should fail");

        assert_eq!(err.into_service_error().meta().code(), Some("BucketNotEmpty"));

        cleanup_bucket(&client, &bucket).await;
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_return_invalid_part_order_on_out_of_order_complete() {
        let client = s3_client();
        let bucket = create_test_bucket(&client, "partorder").await;

        let create = client
            .create_multipart_upload()
            .bucket(&bucket)
            .key("multi.bin")
            .send()
            .await
            .expect("create_multipart_upload");
        let upload_id = create.upload_id().expect("upload id").to_owned();

        let part1 = client
            .upload_part()
            .bucket(&bucket)
            .key("multi.bin")
            .upload_id(&upload_id)
            .part_number(1)
            .body(ByteStream::from_static(&[0u8; 5 * 1024 * 1024]))
            .send()
            .await
            .expect("upload_part 1");
        let part2 = client
            .upload_part()
            .bucket(&bucket)
            .key("multi.bin")
            .upload_id(&upload_id)
            .part_number(2)
            .body(ByteStream::from_static(b"tail"))
            .send()
            .await
            .expect("upload_part 2");

        use aws_sdk_s3::types::{CompletedMultipartUpload, CompletedPart};
        let completed = CompletedMultipartUpload::builder()
            .parts(
                CompletedPart::builder()
                    .part_number(2)
                    .e_tag(part2.e_tag().expect("etag"))
                    .build(),
            )
            .parts(
                CompletedPart::builder()
                    .part_number(1)
                    .e_tag(part1.e_tag().expect("etag"))
                    .build(),
            )
            .build();

        let err = client
            .complete_multipart_upload()
            .bucket(&bucket)
            .key("multi.bin")
            .upload_id(&upload_id)
            .multipart_upload(completed)
            .send()
            .await
            .expect_err("completing with out-of-order parts should fail");

        assert_eq!(
            err.into_service_error().meta().code(),
            Some("InvalidPartOrder")
        );

        cleanup_bucket(&client, &bucket).await;
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_return_no_such_upload_for_unknown_upload_id() {
        let client = s3_client();
        let bucket = create_test_bucket(&client, "nosuchupload").await;

        let err = client
            .abort_multipart_upload()
            .bucket(&bucket)
            .key("multi.bin")
            .upload_id("does-not-exist")
            .send()
            .await
            .expect_err("aborting an unknown upload id should fail");

        assert_eq!(err.into_service_error().meta().code(), Some("NoSuchUpload"));

        cleanup_bucket(&client, &bucket).await;
    }
}
