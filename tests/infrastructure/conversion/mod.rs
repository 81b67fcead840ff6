mod docx_writer_test;
